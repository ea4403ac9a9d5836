//! Line-oriented CUE sheet parser.
//!
//! One pass over the input with a two-state cursor: field directives apply to
//! the header until the first `TRACK` line, then to the most recent track.
//! Tokenization is deliberately positional (first-space split, last-space
//! split for `FILE`, outer-quote strip) so the encoder's output is consumable
//! by this same parser; it does not handle escaped quotes inside filenames.

use crate::codec;
use crate::error::{CueError, CueResult};
use crate::sheet::models::{CueFile, Header, Track};
use crate::sheet::Sheet;
use log::debug;
use std::fs;
use std::path::Path;

/// Reads and parses a CUE sheet file. GBK input is transcoded to UTF-8
/// before parsing; structural violations (a track-only directive before any
/// `TRACK` line, and the reverse) are errors.
pub fn decode(path: impl AsRef<Path>) -> CueResult<Sheet> {
    let path = path.as_ref();
    debug!("Decoding CUE sheet: {:?}", path);

    let text = codec::to_utf8(&fs::read(path)?)?;
    decode_str(&text)
}

/// Parses CUE sheet text already held in memory.
pub fn decode_str(text: &str) -> CueResult<Sheet> {
    let mut decoder = Decoder::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (keyword, payload) = match line.split_once(char::is_whitespace) {
            Some((keyword, payload)) => (keyword, payload),
            None => (line, ""),
        };

        decoder.dispatch(&keyword.to_uppercase(), payload)?;
    }

    Ok(decoder.sheet)
}

enum Target {
    Header,
    Track(usize),
}

/// Parser state for a single decode pass: the growing sheet plus the cursor
/// every field-setting directive is dispatched through.
struct Decoder {
    sheet: Sheet,
    target: Target,
}

impl Decoder {
    fn new() -> Self {
        Self {
            sheet: Sheet::new(),
            target: Target::Header,
        }
    }

    fn dispatch(&mut self, keyword: &str, payload: &str) -> CueResult<()> {
        match keyword {
            "TITLE" => self.set_title(unquote(payload)),
            "PERFORMER" => self.set_performer(unquote(payload)),
            "SONGWRITER" => self.set_song_writer(unquote(payload)),
            "CATALOG" => self.set_catalog(unquote(payload)),
            "CDTEXTFILE" => self.set_cd_text_file(unquote(payload))?,
            "ISRC" => self.set_isrc(unquote(payload))?,
            "FILE" => {
                let (filename, file_type) = split_file_payload(payload)?;
                self.set_file(filename, file_type)?;
            }
            "REM" => self.set_comment(payload),
            "TRACK" => {
                let (id, track_type) = payload
                    .split_once(' ')
                    .ok_or_else(|| malformed("TRACK", payload))?;
                self.sheet.add_track(id, track_type);
                self.target = Target::Track(self.sheet.tracks.len() - 1);
            }
            "INDEX" => {
                let (number, begin_time) = payload
                    .split_once(' ')
                    .ok_or_else(|| malformed("INDEX", payload))?;
                self.current_track("INDEX")?.add_index(number, begin_time);
            }
            "FLAGS" => self.current_track("FLAGS")?.flags = payload.to_string(),
            "PREGAP" => self.current_track("PREGAP")?.pregap = Some(payload.to_string()),
            "POSTGAP" => self.current_track("POSTGAP")?.postgap = Some(payload.to_string()),
            // unknown directives are ignored for forward compatibility
            _ => {}
        }
        Ok(())
    }

    fn header(&mut self, directive: &'static str) -> CueResult<&mut Header> {
        match self.target {
            Target::Header => Ok(&mut self.sheet.header),
            Target::Track(_) => Err(CueError::InvalidTarget {
                directive,
                target: "track",
            }),
        }
    }

    fn current_track(&mut self, directive: &'static str) -> CueResult<&mut Track> {
        match self.target {
            Target::Track(i) => Ok(&mut self.sheet.tracks[i]),
            Target::Header => Err(CueError::InvalidTarget {
                directive,
                target: "sheet header",
            }),
        }
    }

    fn set_title(&mut self, title: &str) {
        match self.target {
            Target::Header => self.sheet.header.title = title.to_string(),
            Target::Track(i) => self.sheet.tracks[i].title = title.to_string(),
        }
    }

    fn set_performer(&mut self, performer: &str) {
        match self.target {
            Target::Header => self.sheet.header.performer = performer.to_string(),
            Target::Track(i) => self.sheet.tracks[i].performer = performer.to_string(),
        }
    }

    fn set_song_writer(&mut self, song_writer: &str) {
        match self.target {
            Target::Header => self.sheet.header.song_writer = song_writer.to_string(),
            Target::Track(i) => self.sheet.tracks[i].song_writer = song_writer.to_string(),
        }
    }

    fn set_catalog(&mut self, catalog: &str) {
        match self.target {
            Target::Header => self.sheet.header.catalog = catalog.to_string(),
            Target::Track(i) => self.sheet.tracks[i].catalog = catalog.to_string(),
        }
    }

    fn set_cd_text_file(&mut self, filename: &str) -> CueResult<()> {
        self.header("CDTEXTFILE")?.cd_text_file = filename.to_string();
        Ok(())
    }

    fn set_isrc(&mut self, isrc: &str) -> CueResult<()> {
        self.current_track("ISRC")?.isrc = isrc.to_string();
        Ok(())
    }

    fn set_file(&mut self, filename: &str, file_type: &str) -> CueResult<()> {
        self.header("FILE")?.file = CueFile {
            filename: filename.to_string(),
            file_type: file_type.to_string(),
        };
        Ok(())
    }

    /// The `REM` payload rule. A payload opening with a quote is a free-form
    /// comment stored whole (quotes kept); `KEY value` splits on the first
    /// space; a single bare token becomes a key only when it is one of the
    /// well-known metadata keys, otherwise it stays a free-form value.
    fn set_comment(&mut self, payload: &str) {
        let (key, value) = if payload.starts_with('"') {
            (String::new(), payload.to_string())
        } else {
            match payload.find(' ') {
                Some(i) if i > 0 => (payload[..i].to_string(), payload[i + 1..].to_string()),
                _ => {
                    let key = payload.to_uppercase();
                    match key.as_str() {
                        "GENRE" | "DISCID" | "DATE" | "COMMENT" => (key, String::new()),
                        _ => (String::new(), payload.to_string()),
                    }
                }
            }
        };

        match self.target {
            Target::Header => self.sheet.header.add_comment(key, value),
            Target::Track(i) => self.sheet.tracks[i].add_comment(key, value),
        }
    }
}

/// Strips at most one leading and one trailing double-quote character.
fn unquote(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

/// Splits a `FILE` payload of the shape `"filename" TYPE` on the *last*
/// space: the file type is the token after it, the filename is everything
/// between the outer quote positions.
fn split_file_payload(payload: &str) -> CueResult<(&str, &str)> {
    let sep = payload.rfind(' ').ok_or_else(|| malformed("FILE", payload))?;
    if sep < 2 || !payload.is_char_boundary(1) || !payload.is_char_boundary(sep - 1) {
        return Err(malformed("FILE", payload));
    }
    Ok((&payload[1..sep - 1], &payload[sep + 1..]))
}

fn malformed(keyword: &'static str, payload: &str) -> CueError {
    CueError::MalformedDirective {
        keyword,
        payload: payload.to_string(),
    }
}
