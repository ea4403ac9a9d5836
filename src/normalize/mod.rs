use crate::codec;
use crate::error::CueResult;
use crate::util::write_atomic;
use log::debug;
use std::fs;
use std::path::Path;

/// A line-rewrite rule: maps a line to its replacement. Returning an empty
/// string deletes the line and short-circuits the remaining rules for it.
pub type LineRule<'a> = &'a dyn Fn(&str) -> String;

/// Filters and rewrites a text file line by line, in place.
///
/// Blank lines are dropped before any rule runs; each surviving line is fed
/// through `rules` in order, and dropped if the end result trims to empty.
/// The rewritten file replaces the original atomically. Rules know nothing
/// about CUE semantics; callers supply whatever they need (drop `REM COMMENT`
/// lines, rewrite a `FILE` directive's filename, and so on).
pub fn normalize_lines(path: impl AsRef<Path>, rules: &[LineRule]) -> CueResult<()> {
    let path = path.as_ref();
    let text = codec::to_utf8(&fs::read(path)?)?;

    let mut out = String::with_capacity(text.len());
    let mut kept = 0usize;
    let mut total = 0usize;

    for line in text.lines() {
        total += 1;
        if line.is_empty() {
            continue;
        }

        let mut current = line.to_string();
        for rule in rules {
            current = rule(&current);
            if current.is_empty() {
                break;
            }
        }
        if current.trim().is_empty() {
            continue;
        }

        out.push_str(&current);
        out.push('\n');
        kept += 1;
    }

    debug!("Normalized {:?}: kept {}/{} lines", path, kept, total);
    write_atomic(path, out.as_bytes())
}
