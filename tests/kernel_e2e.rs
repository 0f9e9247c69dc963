//! End-to-end generation tests
//!
//! Drives the seeded pipeline: sample parameters → build geometry →
//! solve → synthesize distractors → serialize.

use rustc_hash::FxHashSet;
use stereogen_core::*;

#[test]
fn test_every_kind_produces_a_question() {
    let mut generator = Generator::new(GeneratorConfig::default(), 1).unwrap();
    let questions = generator.generate_each().unwrap();
    assert_eq!(questions.len(), all_kinds().len());

    for question in &questions {
        assert!(
            !question.distractors.is_empty() && question.distractors.len() <= 3,
            "{} produced {} distractors",
            question.kind,
            question.distractors.len()
        );
    }
}

#[test]
fn test_options_are_display_distinct() {
    let mut generator = Generator::new(GeneratorConfig::default(), 2).unwrap();
    for question in generator.generate_each().unwrap() {
        let mut seen = FxHashSet::default();
        for option in question.options() {
            assert!(
                seen.insert(option.to_string()),
                "kind {} rendered duplicate option {}",
                question.kind,
                option
            );
        }
        assert_eq!(seen.len(), 1 + question.distractors.len());
    }
}

#[test]
fn test_same_seed_reproduces_identical_questions() {
    let mut first = Generator::new(GeneratorConfig::default(), 42).unwrap();
    let mut second = Generator::new(GeneratorConfig::default(), 42).unwrap();
    assert_eq!(
        first.generate_each().unwrap(),
        second.generate_each().unwrap()
    );
}

#[test]
fn test_different_seeds_diverge() {
    let mut first = Generator::new(GeneratorConfig::default(), 1).unwrap();
    let mut second = Generator::new(GeneratorConfig::default(), 2).unwrap();
    assert_ne!(
        first.generate_each().unwrap(),
        second.generate_each().unwrap()
    );
}

#[test]
fn test_question_json_round_trip() {
    let mut generator = Generator::new(GeneratorConfig::default(), 7).unwrap();
    for question in generator.generate_each().unwrap() {
        let json = question.to_json().unwrap();
        let back = Question::from_json(&json).unwrap();
        assert_eq!(question, back, "kind {} JSON round trip", question.kind);
    }
}

#[test]
fn test_many_seeds_never_emit_duplicate_options() {
    for seed in 0..40 {
        let mut generator = Generator::new(GeneratorConfig::default(), seed).unwrap();
        for question in generator.generate_each().unwrap() {
            let mut seen = FxHashSet::default();
            for option in question.options() {
                assert!(
                    seen.insert(option.to_string()),
                    "seed {} kind {} duplicate option {}",
                    seed,
                    question.kind,
                    option
                );
            }
        }
    }
}

#[test]
fn test_narrow_config_still_generates() {
    let config = GeneratorConfig {
        coord_min: -3,
        coord_max: 3,
        coeff_min: -2,
        coeff_max: 2,
        max_attempts: 256,
        ..Default::default()
    };
    let mut generator = Generator::new(config, 5).unwrap();
    let questions = generator.generate_each().unwrap();
    assert_eq!(questions.len(), all_kinds().len());
}
