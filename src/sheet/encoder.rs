//! Canonical CUE sheet serializer.
//!
//! Field order, quoting, and indentation are fixed so that output parses
//! back through the decoder unchanged: header lines unindented, `TRACK`
//! lines indented two spaces, everything under a track four. String-valued
//! directives are quoted; track ids, index numbers, times, flags, and file
//! types are not.

use crate::error::CueResult;
use crate::sheet::models::{Comment, Header, Track};
use crate::sheet::Sheet;
use crate::writer::StringWrite;

/// Serializes a sheet into the destination and flushes it. On success the
/// output is fully written; no partial text is left buffered.
pub fn encode<W: StringWrite>(sheet: &Sheet, w: &mut W) -> CueResult<()> {
    write_header(&sheet.header, w)?;
    for track in &sheet.tracks {
        write_track(track, w)?;
    }
    w.flush()
}

fn write_header<W: StringWrite>(header: &Header, w: &mut W) -> CueResult<()> {
    w.write_str(&format!("TITLE \"{}\"\n", header.title))?;
    w.write_str(&format!("PERFORMER \"{}\"\n", header.performer))?;
    if !header.song_writer.is_empty() {
        w.write_str(&format!("SONGWRITER \"{}\"\n", header.song_writer))?;
    }
    if !header.catalog.is_empty() {
        w.write_str(&format!("CATALOG \"{}\"\n", header.catalog))?;
    }
    if !header.cd_text_file.is_empty() {
        w.write_str(&format!("CDTEXTFILE \"{}\"\n", header.cd_text_file))?;
    }
    for comment in &header.comments {
        write_comment(comment, "", w)?;
    }
    w.write_str(&format!(
        "FILE \"{}\" {}\n",
        header.file.filename, header.file.file_type
    ))?;
    Ok(())
}

fn write_track<W: StringWrite>(track: &Track, w: &mut W) -> CueResult<()> {
    w.write_str(&format!("  TRACK {} {}\n", track.id, track.track_type))?;
    w.write_str(&format!("    TITLE \"{}\"\n", track.title))?;
    if !track.performer.is_empty() {
        w.write_str(&format!("    PERFORMER \"{}\"\n", track.performer))?;
    }
    if !track.song_writer.is_empty() {
        w.write_str(&format!("    SONGWRITER \"{}\"\n", track.song_writer))?;
    }
    if !track.catalog.is_empty() {
        w.write_str(&format!("    CATALOG \"{}\"\n", track.catalog))?;
    }
    if !track.isrc.is_empty() {
        w.write_str(&format!("    ISRC \"{}\"\n", track.isrc))?;
    }
    if !track.flags.is_empty() {
        w.write_str(&format!("    FLAGS {}\n", track.flags))?;
    }
    for comment in &track.comments {
        write_comment(comment, "    ", w)?;
    }
    if let Some(pregap) = &track.pregap {
        w.write_str(&format!("    PREGAP {}\n", pregap))?;
    }
    for index in &track.indexes {
        w.write_str(&format!("    INDEX {} {}\n", index.number, index.begin_time))?;
    }
    if let Some(postgap) = &track.postgap {
        w.write_str(&format!("    POSTGAP {}\n", postgap))?;
    }
    Ok(())
}

/// A keyed comment emits `REM <key>` plus the value only when one exists; a
/// keyless comment re-emits its payload verbatim after `REM `.
fn write_comment<W: StringWrite>(comment: &Comment, indent: &str, w: &mut W) -> CueResult<()> {
    if comment.key.is_empty() {
        w.write_str(&format!("{}REM {}\n", indent, comment.value))
    } else if comment.value.is_empty() {
        w.write_str(&format!("{}REM {}\n", indent, comment.key))
    } else {
        w.write_str(&format!("{}REM {} {}\n", indent, comment.key, comment.value))
    }
}
