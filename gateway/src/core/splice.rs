//! Line-targeted insertion into file content.

use crate::error::{GatewayError, GatewayResult};

/// Insert every line of `content` before line `line` (1-based) of `original`.
///
/// Valid targets are `1..=line_count + 1`; the upper bound appends after the
/// last line. `\n`, `\r\n` and a lone `\r` all end a line, on both sides.
/// Each output line is followed by the first terminator `original` uses, or
/// `\n` if it has none.
pub fn insert_lines(original: &str, line: i64, content: &str) -> GatewayResult<String> {
    let existing = split_lines(original);
    let index = insertion_index(line, existing.len())?;
    let inserted = split_lines(content);

    let mut spliced: Vec<&str> = Vec::with_capacity(existing.len() + inserted.len());
    spliced.extend_from_slice(&existing[..index]);
    spliced.extend(inserted);
    spliced.extend_from_slice(&existing[index..]);

    let terminator = terminator_of(original);
    let mut out = String::with_capacity(original.len() + content.len() + terminator.len());
    for text in spliced {
        out.push_str(text);
        out.push_str(terminator);
    }
    Ok(out)
}

/// Like [`str::lines`], but a lone `\r` also ends a line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(end) = rest.find(['\r', '\n']) {
        lines.push(&rest[..end]);
        let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + width..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

fn terminator_of(text: &str) -> &'static str {
    match text.find(['\r', '\n']).map(|end| &text[end..]) {
        Some(tail) if tail.starts_with("\r\n") => "\r\n",
        Some(tail) if tail.starts_with('\r') => "\r",
        _ => "\n",
    }
}

/// Zero-based slot for a 1-based line, checked against `[1, line_count + 1]`.
fn insertion_index(line: i64, line_count: usize) -> GatewayResult<usize> {
    let out_of_range = || GatewayError::LineOutOfRange { line, line_count };
    let index = usize::try_from(line)
        .ok()
        .and_then(|line| line.checked_sub(1))
        .ok_or_else(out_of_range)?;
    if index > line_count {
        return Err(out_of_range());
    }
    Ok(index)
}
