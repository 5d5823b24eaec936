// ============================================================
// Layer 4 — Document Loader
// ============================================================
// Loads every .txt file of a directory as one Document.
//
// Files are read in file-name order so that the corpus, the
// frequency index and therefore the ranking tie-breaks are the
// same on every platform. Unreadable files are skipped with a
// warning, the same way a single bad document never stops a run.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// Extension of the documents we parse
const TEXT_EXTENSION: &str = "txt";

/// Loads all .txt files from a given directory.
pub struct TextLoader {
    dir: PathBuf,
}

impl TextLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Sorted paths of the .txt files in the directory.
    /// A missing directory yields an empty list.
    fn text_files(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.exists() {
            tracing::warn!(
                "Docs directory '{}' does not exist, returning empty corpus",
                self.dir.display()
            );
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
        {
            let path = entry?.path();
            if path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(TEXT_EXTENSION)
            {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl DocumentSource for TextLoader {
    fn load_all(&self) -> Result<Vec<Document>> {
        let mut docs = Vec::new();

        for path in self.text_files()? {
            match load_single_text(&path) {
                Ok(doc) => {
                    tracing::debug!("Loaded: {} ({} chars)", doc.source, doc.text.len());
                    docs.push(doc);
                }
                Err(e) => {
                    tracing::warn!("Skipping '{}': {:#}", path.display(), e);
                }
            }
        }

        tracing::info!("Successfully loaded {} documents", docs.len());
        Ok(docs)
    }

    fn count(&self) -> Result<usize> {
        Ok(self.text_files()?.len())
    }
}

/// Read one UTF-8 text file; the file name becomes the source id.
fn load_single_text(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let source = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(Document::new(source, text))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_loads_only_txt_files_in_name_order() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("b.txt"), "second").unwrap();
        fs::write(tmp.path().join("a.txt"), "first").unwrap();
        fs::write(tmp.path().join("notes.md"), "ignored").unwrap();

        let loader = TextLoader::new(tmp.path());
        let docs = loader.load_all().unwrap();

        let names: Vec<&str> = docs.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(docs[0].text, "first");
        assert_eq!(loader.count().unwrap(), 2);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let tmp = tempdir().unwrap();
        let loader = TextLoader::new(tmp.path().join("nope"));
        assert!(loader.load_all().unwrap().is_empty());
        assert_eq!(loader.count().unwrap(), 0);
    }

    #[test]
    fn test_skips_non_utf8_file() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(tmp.path().join("good.txt"), "fine").unwrap();

        let docs = TextLoader::new(tmp.path()).load_all().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "good.txt");
    }
}
