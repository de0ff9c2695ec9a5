use super::Occurrence;
use crate::error::{BindError, BindResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Sql,
    /// `/* ... */`
    BlockComment,
    /// `-- ...` up to a newline
    LineComment,
    /// `'...'`, with `''` as an escaped quote
    Quoted,
    /// `:name`, started at the given byte offset
    Placeholder(usize),
}

fn is_ident_byte(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Single pass over the template bytes. Any error discards the occurrences
/// collected so far.
pub(super) fn scan_template(template: &str) -> BindResult<Vec<Occurrence>> {
    let bytes = template.as_bytes();
    let mut occurrences = Vec::new();
    let mut mode = Mode::Sql;
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        let next = bytes.get(i + 1).copied();

        match mode {
            Mode::BlockComment => {
                if c == b'*' && next == Some(b'/') {
                    mode = Mode::Sql;
                    i += 2;
                } else {
                    i += 1;
                }
            }
            Mode::LineComment => {
                if c == b'\n' {
                    mode = Mode::Sql;
                }
                i += 1;
            }
            Mode::Quoted => {
                if c == b'\'' {
                    if next == Some(b'\'') {
                        i += 2;
                        continue;
                    }
                    mode = Mode::Sql;
                }
                i += 1;
            }
            Mode::Placeholder(start) => {
                if is_ident_byte(c) {
                    i += 1;
                    continue;
                }
                occurrences.push(close_placeholder(template, start, i)?);
                // The terminating byte is re-read in Sql mode.
                mode = Mode::Sql;
            }
            Mode::Sql => match (c, next) {
                (b'/', Some(b'*')) => {
                    mode = Mode::BlockComment;
                    i += 2;
                }
                (b'-', Some(b'-')) => {
                    mode = Mode::LineComment;
                    i += 2;
                }
                (b'\'', _) => {
                    mode = Mode::Quoted;
                    i += 1;
                }
                // `::` type cast
                (b':', Some(b':')) => i += 2,
                (b':', _) => {
                    mode = Mode::Placeholder(i);
                    i += 1;
                }
                _ => i += 1,
            },
        }
    }

    if let Mode::Placeholder(start) = mode {
        occurrences.push(close_placeholder(template, start, bytes.len())?);
    }

    Ok(occurrences)
}

fn close_placeholder(template: &str, start: usize, end: usize) -> BindResult<Occurrence> {
    if end <= start + 1 {
        return Err(BindError::EmptyPlaceholderMarker { position: start });
    }
    Ok(Occurrence {
        name: template[start..end].to_string(),
        position: start,
    })
}
