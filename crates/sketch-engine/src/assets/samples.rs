use std::fmt;

use serde::{Deserialize, Serialize};

const PITCH_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A musical pitch as a semitone index (MIDI numbering: C4 = 60).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Note(u8);

/// Why a note name failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteParseError {
    Empty,
    BadLetter(char),
    BadOctave(String),
}

impl fmt::Display for NoteParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteParseError::Empty => write!(f, "empty note name"),
            NoteParseError::BadLetter(c) => write!(f, "unknown pitch letter '{c}'"),
            NoteParseError::BadOctave(s) => write!(f, "bad octave '{s}'"),
        }
    }
}

impl std::error::Error for NoteParseError {}

impl Note {
    /// Parse a name like `"C4"`, `"D#2"` or `"Ds2"` (the sharp spelling
    /// sample files use).
    pub fn parse(name: &str) -> Result<Note, NoteParseError> {
        let mut chars = name.chars();
        let letter = chars.next().ok_or(NoteParseError::Empty)?;
        let mut pitch_class: i32 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            other => return Err(NoteParseError::BadLetter(other)),
        };

        let rest: &str = chars.as_str();
        let octave_str = if let Some(stripped) =
            rest.strip_prefix('#').or_else(|| rest.strip_prefix('s'))
        {
            pitch_class += 1;
            stripped
        } else if let Some(stripped) = rest.strip_prefix('b') {
            pitch_class -= 1;
            stripped
        } else {
            rest
        };

        let octave: i32 = octave_str
            .parse()
            .map_err(|_| NoteParseError::BadOctave(octave_str.to_string()))?;
        let midi = 12 * (octave + 1) + pitch_class.rem_euclid(12);
        if !(0..=127).contains(&midi) {
            return Err(NoteParseError::BadOctave(octave_str.to_string()));
        }
        Ok(Note(midi as u8))
    }

    pub fn midi(self) -> u8 {
        self.0
    }

    /// Semitone distance to another note.
    pub fn interval_to(self, other: Note) -> u32 {
        (self.0 as i32 - other.0 as i32).unsigned_abs()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pitch = PITCH_NAMES[(self.0 % 12) as usize];
        let octave = self.0 as i32 / 12 - 1;
        write!(f, "{pitch}{octave}")
    }
}

/// One sample in the manifest: the pitch it was recorded at and its file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleDescriptor {
    /// Note name, e.g. "A0" or "Ds1".
    pub note: String,
    /// Relative path to the audio file (e.g. "A0.mp3").
    pub path: String,
}

/// Sample manifest describing a pitched instrument for a sketch.
/// Loaded from a JSON file at setup, before the first frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleManifest {
    /// Base URL the host prepends to every sample path.
    pub base_url: String,
    /// Release envelope in seconds applied by the host sampler.
    #[serde(default)]
    pub release: f32,
    /// Available samples, any order.
    pub samples: Vec<SampleDescriptor>,
}

impl SampleManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Pitch-indexed view of a loaded manifest. Slot order is ascending pitch
/// and doubles as the wire value of a note event.
#[derive(Debug, Clone, Default)]
pub struct SampleBank {
    notes: Vec<Note>,
}

impl SampleBank {
    pub fn from_manifest(manifest: &SampleManifest) -> Result<Self, NoteParseError> {
        let mut notes = Vec::with_capacity(manifest.samples.len());
        for sample in &manifest.samples {
            notes.push(Note::parse(&sample.note)?);
        }
        notes.sort();
        notes.dedup();
        Ok(Self { notes })
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn note_at(&self, slot: u32) -> Option<Note> {
        self.notes.get(slot as usize).copied()
    }

    /// Slot of the sample pitch-closest to `note`, the way a host sampler
    /// picks which recording to shift. `None` while no manifest is loaded.
    pub fn nearest(&self, note: Note) -> Option<u32> {
        if self.notes.is_empty() {
            return None;
        }
        let slot = match self.notes.binary_search(&note) {
            Ok(i) => i,
            Err(0) => 0,
            Err(i) if i == self.notes.len() => self.notes.len() - 1,
            Err(i) => {
                let below = self.notes[i - 1].interval_to(note);
                let above = self.notes[i].interval_to(note);
                if above < below {
                    i
                } else {
                    i - 1
                }
            }
        };
        Some(slot as u32)
    }
}
