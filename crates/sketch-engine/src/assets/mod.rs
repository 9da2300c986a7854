pub mod samples;

pub use samples::{Note, NoteParseError, SampleBank, SampleDescriptor, SampleManifest};
