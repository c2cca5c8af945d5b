//! Note identifiers and the keyboard frequency table.
//!
//! The keyboard spans nine octaves (0–8) of twelve pitch classes, 108 keys in
//! total. Identifiers are spelled with sharps (`"C#4"`); flats with a sharp
//! equivalent (`"Db4"`) are accepted on input and normalized.
//!
//! ```rust
//! use clavier_synth::{Note, NoteTable};
//!
//! let table = NoteTable::standard();
//! assert_eq!(table.frequency_of("A4").unwrap(), 440.0);
//!
//! let note: Note = "Db4".parse().unwrap();
//! assert_eq!(note.to_string(), "C#4");
//! ```

use crate::error::{Result, SynthError};
use std::fmt;
use std::str::FromStr;

/// Number of pitch classes per octave.
pub const PITCH_CLASSES: usize = 12;

/// Highest octave on the keyboard.
pub const MAX_OCTAVE: u8 = 8;

/// Number of keys on the keyboard.
pub const NOTE_COUNT: usize = PITCH_CLASSES * (MAX_OCTAVE as usize + 1);

/// Pitch class within an octave, ordered from C to B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    /// C
    C,
    /// C sharp / D flat
    CSharp,
    /// D
    D,
    /// D sharp / E flat
    DSharp,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    FSharp,
    /// G
    G,
    /// G sharp / A flat
    GSharp,
    /// A
    A,
    /// A sharp / B flat
    ASharp,
    /// B
    B,
}

impl PitchClass {
    /// All pitch classes in ascending order.
    pub const ALL: [PitchClass; PITCH_CLASSES] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Semitone offset above C (C = 0, B = 11).
    pub fn semitone(self) -> u8 {
        self as u8
    }

    /// Canonical sharp spelling.
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Whether this pitch class is played on a black key.
    pub fn is_black(self) -> bool {
        matches!(
            self,
            PitchClass::CSharp
                | PitchClass::DSharp
                | PitchClass::FSharp
                | PitchClass::GSharp
                | PitchClass::ASharp
        )
    }

    fn from_spelling(spelling: &str) -> Option<Self> {
        let pitch = match spelling {
            "C" => PitchClass::C,
            "C#" | "Db" => PitchClass::CSharp,
            "D" => PitchClass::D,
            "D#" | "Eb" => PitchClass::DSharp,
            "E" => PitchClass::E,
            "F" => PitchClass::F,
            "F#" | "Gb" => PitchClass::FSharp,
            "G" => PitchClass::G,
            "G#" | "Ab" => PitchClass::GSharp,
            "A" => PitchClass::A,
            "A#" | "Bb" => PitchClass::ASharp,
            "B" => PitchClass::B,
            _ => return None,
        };
        Some(pitch)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A key on the keyboard: pitch class plus octave.
///
/// Ordering is by pitch height, so a sorted collection of notes runs from
/// C0 up to B8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Note {
    // Field order drives the derived Ord.
    octave: u8,
    pitch: PitchClass,
}

impl Note {
    /// Create a note, rejecting octaves above [`MAX_OCTAVE`].
    pub fn new(pitch: PitchClass, octave: u8) -> Result<Self> {
        if octave > MAX_OCTAVE {
            return Err(SynthError::unknown_note(format!("{pitch}{octave}")));
        }
        Ok(Self { octave, pitch })
    }

    /// Note at a keyboard index (0 = C0, 107 = B8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < NOTE_COUNT).then(|| Self {
            octave: (index / PITCH_CLASSES) as u8,
            pitch: PitchClass::ALL[index % PITCH_CLASSES],
        })
    }

    /// Pitch class of this note.
    pub fn pitch(&self) -> PitchClass {
        self.pitch
    }

    /// Octave of this note (0–8).
    pub fn octave(&self) -> u8 {
        self.octave
    }

    /// Position on the keyboard (0 = C0, 107 = B8).
    pub fn index(&self) -> usize {
        self.octave as usize * PITCH_CLASSES + self.pitch.semitone() as usize
    }

    /// MIDI note number (C4 = 60).
    pub fn midi(&self) -> u8 {
        (self.octave + 1) * PITCH_CLASSES as u8 + self.pitch.semitone()
    }

    /// Whether this note is played on a black key.
    pub fn is_black(&self) -> bool {
        self.pitch.is_black()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch, self.octave)
    }
}

impl FromStr for Note {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self> {
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| SynthError::unknown_note(s))?;
        let (spelling, octave) = s.split_at(split);

        let pitch =
            PitchClass::from_spelling(spelling).ok_or_else(|| SynthError::unknown_note(s))?;
        let octave = match octave.as_bytes() {
            [digit @ b'0'..=b'9'] => digit - b'0',
            _ => return Err(SynthError::unknown_note(s)),
        };
        if octave > MAX_OCTAVE {
            return Err(SynthError::unknown_note(s));
        }

        Ok(Self { octave, pitch })
    }
}

/// Fundamental frequencies in Hz, one row per octave, C through B.
#[rustfmt::skip]
const FREQUENCIES: [[f64; PITCH_CLASSES]; MAX_OCTAVE as usize + 1] = [
    [16.35, 17.32, 18.35, 19.45, 20.60, 21.83, 23.12, 24.50, 25.96, 27.50, 29.14, 30.87],
    [32.70, 34.65, 36.71, 38.89, 41.20, 43.65, 46.25, 49.00, 51.91, 55.00, 58.27, 61.74],
    [65.41, 69.30, 73.42, 77.78, 82.41, 87.31, 92.50, 98.00, 103.83, 110.00, 116.54, 123.47],
    [130.81, 138.59, 146.83, 155.56, 164.81, 174.61, 185.00, 196.00, 207.65, 220.00, 233.08, 246.94],
    [261.63, 277.18, 293.66, 311.13, 329.63, 349.23, 369.99, 392.00, 415.30, 440.00, 466.16, 493.88],
    [523.25, 554.37, 587.33, 622.25, 659.25, 698.46, 739.99, 783.99, 830.61, 880.00, 932.33, 987.77],
    [1046.50, 1108.73, 1174.66, 1244.51, 1318.51, 1396.91, 1479.98, 1567.98, 1661.22, 1760.00, 1864.66, 1975.53],
    [2093.00, 2217.46, 2349.32, 2489.02, 2637.02, 2793.83, 2959.96, 3135.96, 3322.44, 3520.00, 3729.31, 3951.07],
    [4186.01, 4434.92, 4698.64, 4978.03, 5274.04, 5587.65, 5919.91, 6271.93, 6644.88, 7040.00, 7458.62, 7902.13],
];

static STANDARD: NoteTable = NoteTable {
    frequencies: FREQUENCIES,
};

/// Read-only mapping from keyboard notes to fundamental frequencies.
///
/// The table is a compile-time constant; [`NoteTable::standard`] hands out a
/// shared reference to it.
#[derive(Debug, PartialEq)]
pub struct NoteTable {
    frequencies: [[f64; PITCH_CLASSES]; MAX_OCTAVE as usize + 1],
}

impl NoteTable {
    /// The standard 108-key table (C0 = 16.35 Hz through B8 = 7902.13 Hz).
    pub fn standard() -> &'static NoteTable {
        &STANDARD
    }

    /// Frequency in Hz of a note identifier such as `"C#4"`.
    ///
    /// Fails with [`SynthError::UnknownNote`] for anything outside the table.
    pub fn frequency_of(&self, id: &str) -> Result<f64> {
        let note: Note = id.parse()?;
        Ok(self.frequency(note))
    }

    /// Frequency in Hz of an already-parsed note.
    pub fn frequency(&self, note: Note) -> f64 {
        self.frequencies[note.octave as usize][note.pitch.semitone() as usize]
    }

    /// Number of notes in the table.
    pub fn len(&self) -> usize {
        NOTE_COUNT
    }

    /// Always `false`; the table is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate `(note, frequency)` pairs from lowest to highest.
    pub fn iter(&self) -> impl Iterator<Item = (Note, f64)> + '_ {
        (0..NOTE_COUNT).filter_map(move |i| Note::from_index(i).map(|n| (n, self.frequency(n))))
    }

    /// White keys in ascending order.
    pub fn white_keys(&self) -> impl Iterator<Item = Note> + '_ {
        self.iter().map(|(n, _)| n).filter(|n| !n.is_black())
    }

    /// Black keys in ascending order.
    pub fn black_keys(&self) -> impl Iterator<Item = Note> + '_ {
        self.iter().map(|(n, _)| n).filter(|n| n.is_black())
    }
}

/// Frequency of a note identifier in the standard table.
pub fn frequency_of(id: &str) -> Result<f64> {
    NoteTable::standard().frequency_of(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_108_notes() {
        let table = NoteTable::standard();
        assert_eq!(table.len(), 108);
        assert_eq!(table.iter().count(), 108);
        assert_eq!(table.white_keys().count(), 63);
        assert_eq!(table.black_keys().count(), 45);
    }

    #[test]
    fn table_endpoints() {
        assert_eq!(frequency_of("C0").unwrap(), 16.35);
        assert_eq!(frequency_of("B8").unwrap(), 7902.13);
        assert_eq!(frequency_of("A4").unwrap(), 440.0);
        assert_eq!(frequency_of("C#4").unwrap(), 277.18);
    }

    #[test]
    fn table_strictly_increasing() {
        let freqs: Vec<f64> = NoteTable::standard().iter().map(|(_, f)| f).collect();
        for pair in freqs.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn parse_and_display_round_trip() {
        for (note, _) in NoteTable::standard().iter() {
            let spelled = note.to_string();
            assert_eq!(spelled.parse::<Note>().unwrap(), note);
        }
    }

    #[test]
    fn flats_normalize_to_sharps() {
        assert_eq!("Db4".parse::<Note>().unwrap().to_string(), "C#4");
        assert_eq!("Bb0".parse::<Note>().unwrap().to_string(), "A#0");
        assert_eq!(frequency_of("Eb5").unwrap(), frequency_of("D#5").unwrap());
    }

    #[test]
    fn unknown_identifiers_rejected() {
        for id in ["H4", "C9", "C", "4", "", "c4", "Cb4", "E#4", "C#10", "C-1", "A 4"] {
            assert!(
                matches!(frequency_of(id), Err(SynthError::UnknownNote(ref s)) if s == id),
                "{id:?} should be unknown"
            );
        }
    }

    #[test]
    fn note_index_and_midi() {
        let c4: Note = "C4".parse().unwrap();
        assert_eq!(c4.midi(), 60);
        assert_eq!(c4.index(), 48);
        assert_eq!(Note::from_index(48), Some(c4));
        assert_eq!(Note::from_index(108), None);
        assert_eq!("A4".parse::<Note>().unwrap().midi(), 69);
    }

    #[test]
    fn note_new_rejects_high_octave() {
        assert!(Note::new(PitchClass::C, 9).is_err());
        assert_eq!(Note::new(PitchClass::G, 4).unwrap().to_string(), "G4");
    }

    #[test]
    fn notes_sort_by_pitch_height() {
        let mut notes: Vec<Note> = ["C5", "B4", "C#4", "C4"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        notes.sort();
        let spelled: Vec<String> = notes.iter().map(ToString::to_string).collect();
        assert_eq!(spelled, ["C4", "C#4", "B4", "C5"]);
    }
}
