/// Shared frame-buffer layout.
/// Must stay in sync with the TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Discs: max_discs x 8 floats]
/// [Segments: max_segments x 8 floats]
/// [Notes: max_notes x 1 float]
/// [Events: max_events x 4 floats]
/// ```
///
/// Capacities are written once into the header at init; the host reads them
/// to compute section offsets dynamically.
use crate::api::sketch::SketchConfig;
use crate::api::types::SketchEvent;
use crate::surface::{DiscInstance, SegmentInstance};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_MAX_DISCS: usize = 1;
pub const HEADER_DISC_COUNT: usize = 2;
pub const HEADER_MAX_SEGMENTS: usize = 3;
pub const HEADER_SEGMENT_COUNT: usize = 4;
pub const HEADER_MAX_NOTES: usize = 5;
pub const HEADER_NOTE_COUNT: usize = 6;
pub const HEADER_MAX_EVENTS: usize = 7;
pub const HEADER_EVENT_COUNT: usize = 8;
pub const HEADER_VIEW_ZOOM: usize = 9;
pub const HEADER_FADE_ALPHA: usize = 10;
pub const HEADER_BACKGROUND_R: usize = 11;
pub const HEADER_BACKGROUND_G: usize = 12;
pub const HEADER_BACKGROUND_B: usize = 13;
pub const HEADER_PROTOCOL_VERSION: usize = 14;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub max_discs: usize,
    pub max_segments: usize,
    pub max_notes: usize,
    pub max_events: usize,

    /// Size of the disc section in floats.
    pub disc_data_floats: usize,
    /// Size of the segment section in floats.
    pub segment_data_floats: usize,
    /// Size of the note section in floats.
    pub note_data_floats: usize,
    /// Size of the event section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where disc data begins.
    pub disc_data_offset: usize,
    /// Offset (in floats) where segment data begins.
    pub segment_data_offset: usize,
    /// Offset (in floats) where note data begins.
    pub note_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl FrameLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_discs: usize,
        max_segments: usize,
        max_notes: usize,
        max_events: usize,
    ) -> Self {
        let disc_data_floats = max_discs * DiscInstance::FLOATS;
        let segment_data_floats = max_segments * SegmentInstance::FLOATS;
        let note_data_floats = max_notes;
        let event_data_floats = max_events * SketchEvent::FLOATS;

        let disc_data_offset = HEADER_FLOATS;
        let segment_data_offset = disc_data_offset + disc_data_floats;
        let note_data_offset = segment_data_offset + segment_data_floats;
        let event_data_offset = note_data_offset + note_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_discs,
            max_segments,
            max_notes,
            max_events,
            disc_data_floats,
            segment_data_floats,
            note_data_floats,
            event_data_floats,
            disc_data_offset,
            segment_data_offset,
            note_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a SketchConfig.
    pub fn from_config(config: &SketchConfig) -> Self {
        Self::new(
            config.max_discs,
            config.max_segments,
            config.max_notes,
            config.max_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_contiguous() {
        let layout = FrameLayout::new(100, 50, 16, 8);
        assert_eq!(layout.disc_data_offset, HEADER_FLOATS);
        assert_eq!(layout.segment_data_offset, HEADER_FLOATS + 800);
        assert_eq!(layout.note_data_offset, layout.segment_data_offset + 400);
        assert_eq!(layout.event_data_offset, layout.note_data_offset + 16);
        assert_eq!(
            layout.buffer_total_floats,
            layout.event_data_offset + 8 * SketchEvent::FLOATS
        );
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn from_config_matches_capacities() {
        let config = SketchConfig {
            max_discs: 256,
            max_segments: 128,
            ..SketchConfig::default()
        };
        let layout = FrameLayout::from_config(&config);
        assert_eq!(layout.max_discs, 256);
        assert_eq!(layout.max_segments, 128);
        assert_eq!(layout.max_notes, config.max_notes);
        assert_eq!(layout.max_events, config.max_events);
    }
}
