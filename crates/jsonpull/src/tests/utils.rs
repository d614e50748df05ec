use alloc::{string::String, vec::Vec};

use crate::{JsonReader, ReadError, ReaderOptions, ReaderState, TokenKind};

/// Collected form of one token: its kind and payload as text.
pub(crate) type Tok = (TokenKind, String);

/// Drains a reader, collecting every token until the clean end of the
/// document (or a rollback, for non-final buffers).
pub(crate) fn collect(reader: &mut JsonReader<'_>) -> Result<Vec<Tok>, ReadError> {
    let mut out = Vec::new();
    while reader.advance()? {
        out.push((
            reader.token_kind(),
            String::from_utf8(reader.value().to_vec()).unwrap(),
        ));
    }
    Ok(out)
}

pub(crate) fn read_all_with(json: &str, options: ReaderOptions) -> Vec<Tok> {
    let mut reader = JsonReader::new(json.as_bytes(), true, options);
    collect(&mut reader).unwrap()
}

pub(crate) fn read_all(json: &str) -> Vec<Tok> {
    read_all_with(json, ReaderOptions::default())
}

pub(crate) fn read_err_with(json: &str, options: ReaderOptions) -> ReadError {
    let mut reader = JsonReader::new(json.as_bytes(), true, options);
    collect(&mut reader).unwrap_err()
}

pub(crate) fn read_err(json: &str) -> ReadError {
    read_err_with(json, ReaderOptions::default())
}

/// Tokenizes `json` split into segments at the given absolute byte offsets,
/// resuming across segments through state snapshots. Only the last segment
/// is marked final.
pub(crate) fn read_split_with(
    json: &str,
    splits: &[usize],
    options: ReaderOptions,
) -> Result<Vec<Tok>, ReadError> {
    let bytes = json.as_bytes();
    let mut points: Vec<usize> = splits.iter().copied().filter(|&p| p < bytes.len()).collect();
    points.sort_unstable();
    points.dedup();
    points.push(bytes.len());

    let mut out = Vec::new();
    let mut state = ReaderState::default();
    let mut offset = 0;
    let last = points.len() - 1;
    for (idx, &end) in points.iter().enumerate() {
        if end < offset {
            continue;
        }
        let mut reader = JsonReader::with_state(&bytes[offset..end], idx == last, options, state);
        while reader.advance()? {
            out.push((
                reader.token_kind(),
                String::from_utf8(reader.value().to_vec()).unwrap(),
            ));
        }
        offset += reader.consumed();
        state = reader.state();
    }
    Ok(out)
}

pub(crate) fn tok(kind: TokenKind, value: &str) -> Tok {
    (kind, String::from(value))
}
