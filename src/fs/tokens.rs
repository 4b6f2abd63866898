use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::FsError;

/// Reads `path` and splits its contents on whitespace.
pub fn load_tokens(path: impl AsRef<Path>) -> Result<Vec<String>, FsError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| FsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tokens: Vec<String> = contents.split_whitespace().map(str::to_owned).collect();
    if tokens.is_empty() {
        warn!(path = %path.display(), "token file is empty, its signature stays at the initial value");
    } else {
        debug!(path = %path.display(), tokens = tokens.len(), "loaded token file");
    }
    Ok(tokens)
}
