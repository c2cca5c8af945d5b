//! Clavier Synth - Tone synthesis for the clavier virtual keyboard
//!
//! This crate turns held keyboard notes into a sampled waveform:
//!
//! - [`NoteTable`] / [`Note`] - the 108-key note table (C0 to B8) and typed identifiers
//! - [`ActiveNoteSet`] - the set of currently held notes
//! - [`generate`] - a sine tone for one frequency
//! - [`mix`] / [`mix_with`] - chords as sample-by-sample sums, with an explicit [`MixPolicy`]
//! - [`Signal`] - the sampled output, with its rate and duration
//!
//! Every operation is a pure function of its inputs. Nothing here holds state
//! between calls.
//!
//! # Example: C major triad
//!
//! ```rust
//! use clavier_synth::{ActiveNoteSet, NoteTable, mix};
//!
//! let held = ActiveNoteSet::from_ids(["C4", "E4", "G4"]).unwrap();
//! let freqs = held.frequencies(NoteTable::standard());
//! assert_eq!(freqs, vec![261.63, 329.63, 392.0]);
//!
//! let chord = mix(&freqs, 1.0, 44100.0).unwrap();
//! assert_eq!(chord.len(), 44100);
//! ```
//!
//! # Errors
//!
//! Unknown identifiers fail with [`SynthError::UnknownNote`]; zero, negative,
//! or non-finite frequencies, durations, and sample rates fail with
//! [`SynthError::InvalidParameter`], as does any request for more than
//! [`MAX_SAMPLES`] samples. Neither is ever replaced by a default.

pub mod active;
pub mod chord;
pub mod error;
pub mod note;
pub mod signal;
pub mod waveform;

pub use active::ActiveNoteSet;
pub use chord::{MixPolicy, mix, mix_with};
pub use error::{Result, SynthError};
pub use note::{MAX_OCTAVE, NOTE_COUNT, Note, NoteTable, PitchClass, frequency_of};
pub use signal::{MAX_SAMPLES, Signal, checked_sample_count, sample_count};
pub use waveform::{DEFAULT_DURATION, DEFAULT_SAMPLE_RATE, generate};
