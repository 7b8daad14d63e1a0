//! Directory-backed page source and result sink.

use super::{PageSource, ResultSink};
use crate::error::{Error, Result};
use crate::model::{Document, StructuralResult};
use crate::render::{to_json, JsonFormat};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of page-renderer dumps, matched case-insensitively.
const TEXT_EXTENSION: &str = "txt";

/// Reads page-renderer dumps (`<id>.txt`, pages split by form feeds) from a
/// directory.
#[derive(Debug, Clone)]
pub struct TextDirSource {
    dir: PathBuf,
}

impl TextDirSource {
    /// Open a directory of `.txt` dumps.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("input directory not found: {}", dir.display()),
            )));
        }
        Ok(Self { dir })
    }

    /// Identifiers (file stems) of all dumps in the directory, sorted.
    pub fn list_documents(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(stem) = text_stem(&entry.path()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        ids.dedup();
        Ok(ids)
    }

    /// Path of the dump for `id`, whatever the case of its extension.
    fn path_for(&self, id: &str) -> PathBuf {
        let exact = self.dir.join(format!("{}.{}", id, TEXT_EXTENSION));
        if exact.is_file() {
            return exact;
        }
        fs::read_dir(&self.dir)
            .into_iter()
            .flatten()
            .flatten()
            .map(|entry| entry.path())
            .find(|path| path.is_file() && text_stem(path) == Some(id))
            .unwrap_or(exact)
    }
}

/// Stem of `path` if it carries the dump extension.
fn text_stem(path: &Path) -> Option<&str> {
    let ext = path.extension()?.to_str()?;
    if !ext.eq_ignore_ascii_case(TEXT_EXTENSION) {
        return None;
    }
    path.file_stem()?.to_str()
}

impl PageSource for TextDirSource {
    fn pages(&self, id: &str) -> Result<Document> {
        let path = self.path_for(id);
        let bytes = fs::read(&path).map_err(|e| Error::Source {
            id: id.to_string(),
            message: format!("{}: {}", path.display(), e),
        })?;
        let document = Document::from_text(&String::from_utf8_lossy(&bytes));
        log::debug!("read {} pages from {}", document.page_count(), path.display());
        Ok(document)
    }
}

/// Writes each result as `<id>.json` into a directory.
#[derive(Debug, Clone)]
pub struct JsonDirSink {
    dir: PathBuf,
    format: JsonFormat,
}

impl JsonDirSink {
    /// Create the output directory if needed.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            format: JsonFormat::Pretty,
        })
    }

    /// Set the JSON format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Output path of a document.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

impl ResultSink for JsonDirSink {
    fn accept(&self, id: &str, result: &StructuralResult) -> Result<()> {
        let json = to_json(result, self.format)?;
        let path = self.path_for(id);
        fs::write(&path, json)?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_documents() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "x").unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join("c.TXT"), "x").unwrap();
        fs::write(dir.path().join("notes.md"), "x").unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let source = TextDirSource::open(dir.path()).unwrap();
        assert_eq!(source.list_documents().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reads_mixed_case_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("memo.Txt"), "first\x0Csecond").unwrap();

        let source = TextDirSource::open(dir.path()).unwrap();
        assert_eq!(source.pages("memo").unwrap().page_count(), 2);
    }

    #[test]
    fn test_open_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(TextDirSource::open(dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_missing_document_is_source_error() {
        let dir = tempdir().unwrap();
        let source = TextDirSource::open(dir.path()).unwrap();
        assert!(matches!(source.pages("nope"), Err(Error::Source { .. })));
    }

    #[test]
    fn test_sink_creates_dir_and_writes() {
        let dir = tempdir().unwrap();
        let sink = JsonDirSink::create(dir.path().join("out")).unwrap();
        let result = StructuralResult::new("Title Here", Vec::new());
        sink.accept("doc", &result).unwrap();

        let written = fs::read_to_string(sink.path_for("doc")).unwrap();
        assert!(written.contains("\"title\": \"Title Here\""));
    }
}
