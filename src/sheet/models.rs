//! The in-memory sheet model. CUE values that look numeric (track ids, index
//! numbers, MM:SS:FF times) are kept as text: ids are zero-padded and times
//! are never validated arithmetically, so the original spelling must survive
//! a decode/encode round trip.

/// Disc-level metadata plus the single file reference backing the disc.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub performer: String,
    pub song_writer: String,
    pub catalog: String,
    pub cd_text_file: String,
    pub comments: Vec<Comment>,
    pub file: CueFile,
}

impl Header {
    pub fn add_comment(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.comments.push(Comment {
            key: key.into(),
            value: value.into(),
        });
    }
}

/// One audio track and its cue points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub track_type: String,
    pub title: String,
    pub performer: String,
    pub song_writer: String,
    pub catalog: String,
    pub isrc: String,
    pub flags: String,
    pub pregap: Option<String>,
    pub postgap: Option<String>,
    pub comments: Vec<Comment>,
    pub indexes: Vec<Index>,
}

impl Track {
    pub fn new(id: impl Into<String>, track_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            track_type: track_type.into(),
            ..Self::default()
        }
    }

    pub fn add_comment(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.comments.push(Comment {
            key: key.into(),
            value: value.into(),
        });
    }

    pub fn add_index(&mut self, number: impl Into<String>, begin_time: impl Into<String>) {
        self.indexes.push(Index {
            number: number.into(),
            begin_time: begin_time.into(),
        });
    }
}

/// A `REM` directive payload. `key` is empty when the original payload was a
/// free-form quoted string; the whole payload then lives in `value` and is
/// re-emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    pub key: String,
    pub value: String,
}

/// A `FILE` directive: filename plus file-type token (WAVE, BINARY, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CueFile {
    pub filename: String,
    pub file_type: String,
}

/// A track-relative cue point: index number plus `MM:SS:FF` begin time,
/// both opaque text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    pub number: String,
    pub begin_time: String,
}
