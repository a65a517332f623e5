//! Loading source files for scanning.
//!
//! The lexer works on a complete in-memory buffer, so a file is always
//! drained fully before the scan begins. Reading is the only step that can
//! fail: bytes that are not UTF-8 are decoded lossily, and each invalid
//! sequence reaches the lexer as one `U+FFFD` it reports as unrecognized.

use std::path::Path;

use simplc_util::{Handler, SourceError, SourceResult};
use tracing::debug;

use crate::lexer::tokenize;
use crate::stream::TokenStream;

/// Reads the whole file at `path` into a string.
///
/// Invalid UTF-8 is replaced with `U+FFFD`, one per invalid sequence.
///
/// # Errors
///
/// [`SourceError::Io`] if the file cannot be read.
pub fn read_source(path: &Path) -> SourceResult<String> {
    let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read source");

    match String::from_utf8(bytes) {
        Ok(source) => Ok(source),
        Err(err) => {
            debug!(
                path = %path.display(),
                offset = err.utf8_error().valid_up_to(),
                "source is not UTF-8, decoding lossily"
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Reads and scans the file at `path`.
///
/// Unrecognized characters go to `handler`; only loading can fail.
pub fn lex_file(path: &Path, handler: &mut Handler) -> SourceResult<TokenStream> {
    let source = read_source(path)?;
    Ok(tokenize(&source, handler))
}
