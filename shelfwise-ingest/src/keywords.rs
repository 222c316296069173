//! Load per-genre reference keywords from `<Genre>_Keywords.txt` files.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shelfwise_core::{Genre, KeywordSet};

use crate::error::IngestError;

/// File name holding `genre`'s keywords, e.g. `Science_Fiction_Keywords.txt`.
pub fn keyword_file_name(genre: Genre) -> String {
    format!("{}_Keywords.txt", genre.label().replace(' ', "_"))
}

pub fn keyword_file_path(dir: &Path, genre: Genre) -> PathBuf {
    dir.join(keyword_file_name(genre))
}

/// Read every genre's keyword file found in `dir`.
///
/// A missing file is not an error: that genre is left out of the set and
/// grading falls back to no keyword bonus for it.
pub fn load_keyword_dir(dir: impl AsRef<Path>) -> Result<KeywordSet, IngestError> {
    let dir = dir.as_ref();
    let mut set = KeywordSet::new();

    for genre in Genre::ALL {
        let path = keyword_file_path(dir, genre);
        match std::fs::read_to_string(&path) {
            Ok(text) => set.insert_text(genre, &text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    genre = %genre,
                    path = %path.display(),
                    "no keyword file found; genre gets no keyword bonus"
                );
            }
            Err(source) => return Err(IngestError::Io { path, source }),
        }
    }

    tracing::info!(genres = set.len(), dir = %dir.display(), "loaded keyword sets");
    Ok(set)
}
