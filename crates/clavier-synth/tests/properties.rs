//! Property-based tests for clavier-synth.
//!
//! Tests signal length, determinism, and mixing identities using proptest
//! for randomized parameters.

use clavier_synth::{
    NOTE_COUNT, MixPolicy, Note, NoteTable, generate, mix, mix_with, sample_count,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Generated length is always round(rate * duration).
    #[test]
    fn generate_length_invariant(
        freq in 1.0f64..8000.0,
        duration in 0.001f64..0.5,
        rate in 1000.0f64..96000.0,
    ) {
        let s = generate(freq, duration, rate).unwrap();
        prop_assert_eq!(s.len(), sample_count(duration, rate));
        prop_assert_eq!(s.len(), (rate * duration).round() as usize);
    }

    /// Identical arguments give identical signals.
    #[test]
    fn generate_is_deterministic(
        freq in 1.0f64..8000.0,
        duration in 0.001f64..0.2,
        rate in 1000.0f64..48000.0,
    ) {
        prop_assert_eq!(generate(freq, duration, rate).unwrap(), generate(freq, duration, rate).unwrap());
    }

    /// Sine samples never leave [-1, 1].
    #[test]
    fn generate_stays_in_unit_range(
        freq in 1.0f64..8000.0,
        rate in 8000.0f64..48000.0,
    ) {
        let s = generate(freq, 0.05, rate).unwrap();
        prop_assert!(!s.exceeds_unit_range());
    }

    /// Mixing one frequency is exactly generating it, under either policy.
    #[test]
    fn singleton_mix_is_identity(
        freq in 1.0f64..8000.0,
        duration in 0.001f64..0.2,
        normalize in any::<bool>(),
    ) {
        let policy = if normalize { MixPolicy::Normalize } else { MixPolicy::Sum };
        let mixed = mix_with(&[freq], duration, 44100.0, policy).unwrap();
        prop_assert_eq!(mixed, generate(freq, duration, 44100.0).unwrap());
    }

    /// Empty mixes are silent and correctly sized.
    #[test]
    fn empty_mix_is_silent(
        duration in 0.001f64..0.5,
        rate in 1000.0f64..96000.0,
    ) {
        let s = mix(&[], duration, rate).unwrap();
        prop_assert_eq!(s.len(), sample_count(duration, rate));
        prop_assert!(s.is_silent());
    }

    /// Raw chord amplitude is bounded by the number of notes.
    #[test]
    fn raw_sum_bounded_by_note_count(
        indices in prop::collection::vec(0usize..NOTE_COUNT, 1..6),
    ) {
        let table = NoteTable::standard();
        let freqs: Vec<f64> = indices
            .iter()
            .map(|&i| table.frequency(Note::from_index(i).unwrap()))
            .collect();
        let s = mix(&freqs, 0.05, 44100.0).unwrap();
        prop_assert!(s.peak_amplitude() <= freqs.len() as f64 + 1e-9);
    }

    /// Every keyboard index parses back from its spelling.
    #[test]
    fn note_spelling_round_trips(index in 0usize..NOTE_COUNT) {
        let note = Note::from_index(index).unwrap();
        let parsed: Note = note.to_string().parse().unwrap();
        prop_assert_eq!(parsed, note);
        prop_assert_eq!(parsed.index(), index);
    }
}
