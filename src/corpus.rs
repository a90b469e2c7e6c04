use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::types::{Label, LabeledDocument};

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to list corpus directory {dir:?}: {source}")]
    ListDir { dir: PathBuf, source: io::Error },

    #[error("failed to read review {path:?}: {source}")]
    ReadReview { path: PathBuf, source: io::Error },
}

/// Reads a directory of movie reviews, one review per file.
///
/// The class of a review is encoded in its filename: when the character at
/// `label_offset` equals `negative_marker` the review is negative, anything
/// else is positive. Filenames too short to reach the offset count as
/// positive. The convention belongs to the corpus, not to this crate, so
/// both knobs are injected rather than hard-coded.
pub struct CorpusReader {
    dir: PathBuf,
    label_offset: usize,
    negative_marker: char,
}

impl CorpusReader {
    pub fn new(dir: impl Into<PathBuf>, label_offset: usize, negative_marker: char) -> Self {
        Self {
            dir: dir.into(),
            label_offset,
            negative_marker,
        }
    }

    fn label_for(&self, filename: &str) -> Label {
        match filename.chars().nth(self.label_offset) {
            Some(c) if c == self.negative_marker => Label::Negative,
            _ => Label::Positive,
        }
    }

    /// Load every review in the corpus directory, labeled by filename.
    ///
    /// The walk aborts on the first unreadable or undecodable file rather
    /// than skipping it.
    pub fn documents(&self) -> Result<Vec<LabeledDocument>, CorpusError> {
        let entries = fs::read_dir(&self.dir).map_err(|source| CorpusError::ListDir {
            dir: self.dir.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| CorpusError::ListDir {
                dir: self.dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            let label = self.label_for(filename);
            let text = fs::read_to_string(&path).map_err(|source| CorpusError::ReadReview {
                path: path.clone(),
                source,
            })?;
            documents.push(LabeledDocument { text, label });
        }

        debug!("loaded {} reviews from {:?}", documents.len(), self.dir);
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_comes_from_the_marker_position() {
        let reader = CorpusReader::new("unused", 7, '1');

        assert_eq!(reader.label_for("movies-1-0042.txt"), Label::Negative);
        assert_eq!(reader.label_for("movies-5-0042.txt"), Label::Positive);
        // Too short to carry a marker.
        assert_eq!(reader.label_for("a.txt"), Label::Positive);
    }

    #[test]
    fn documents_are_loaded_with_their_labels() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("movies-1-0001.txt"), "terrible").unwrap();
        fs::write(dir.path().join("movies-5-0002.txt"), "wonderful").unwrap();

        let reader = CorpusReader::new(dir.path(), 7, '1');
        let docs = reader.documents().unwrap();

        assert_eq!(docs.len(), 2);
        let negative: Vec<_> = docs.iter().filter(|d| d.label == Label::Negative).collect();
        assert_eq!(negative.len(), 1);
        assert_eq!(negative[0].text, "terrible");
    }

    #[test]
    fn missing_directory_fails_the_walk() {
        let reader = CorpusReader::new("/no/such/corpus/dir", 7, '1');
        assert!(matches!(
            reader.documents(),
            Err(CorpusError::ListDir { .. })
        ));
    }

    #[test]
    fn undecodable_review_aborts_the_walk() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("movies-5-0001.txt"), b"\xff\xfe not text").unwrap();

        let reader = CorpusReader::new(dir.path(), 7, '1');
        assert!(matches!(
            reader.documents(),
            Err(CorpusError::ReadReview { .. })
        ));
    }
}
