use crate::error::CueResult;
use crate::sheet::models::{Header, Track};
use crate::writer::EncodingWriter;
use std::io::Write;

pub mod decoder;
pub mod encoder;
pub mod models;

/// Root aggregate: one header plus the tracks in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub header: Header,
    pub tracks: Vec<Track>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a track; field directives that follow during decoding apply
    /// to it until the next `TRACK` line.
    pub fn add_track(&mut self, id: impl Into<String>, track_type: impl Into<String>) -> &mut Track {
        self.tracks.push(Track::new(id, track_type));
        self.tracks.last_mut().unwrap()
    }

    /// Serializes the sheet as canonical CUE text into any byte sink.
    pub fn write_to<W: Write>(&self, w: W) -> CueResult<()> {
        let mut writer = EncodingWriter::new(w);
        encoder::encode(self, &mut writer)
    }
}
