//! Filesystem-backed page storage.
//!
//! Each page lives in a single flat file `<title>.txt` inside the data
//! directory. The store performs no title validation of its own: the route
//! matcher's word-character check is the only thing keeping titles out of
//! path-traversal territory, so callers must only hand it validated titles.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::page::Page;

/// On-disk suffix for page files.
const PAGE_SUFFIX: &str = ".txt";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no page named {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Io(#[from] io::Error),
}

/// Page store rooted at a single data directory.
#[derive(Debug, Clone)]
pub struct PageStore {
    data_dir: PathBuf,
}

impl PageStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn page_path(&self, title: &str) -> PathBuf {
        self.data_dir.join(format!("{title}{PAGE_SUFFIX}"))
    }

    /// Load the page stored under `title`.
    ///
    /// Absence is reported as [`StoreError::NotFound`]; every other I/O
    /// failure surfaces as [`StoreError::Io`].
    pub fn load(&self, title: &str) -> Result<Page, StoreError> {
        let path = self.page_path(title);
        match fs::read_to_string(&path) {
            Ok(body) => Ok(Page::new(title, body)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(title.to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Write the page's whole body, replacing any previous content.
    ///
    /// Page files are created owner-read-write only. There is no temp-file
    /// rename and no cross-request lock: concurrent saves to the same title
    /// race at the filesystem level, last write wins.
    pub fn save(&self, page: &Page) -> Result<(), StoreError> {
        let path = self.page_path(&page.title);
        write_private(&path, page.body.as_bytes())?;
        debug!(title = %page.title, bytes = page.body.len(), "saved page");
        Ok(())
    }

    /// Enumerate stored page titles.
    ///
    /// Entries without the page suffix are skipped. Order follows the OS
    /// directory enumeration and is not sorted.
    pub fn list_titles(&self) -> Result<Vec<String>, StoreError> {
        let mut titles = Vec::new();
        for entry in fs::read_dir(&self.data_dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(title) = name.strip_suffix(PAGE_SUFFIX) {
                titles.push(title.to_string());
            }
        }
        Ok(titles)
    }
}

#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    // Mode applies on creation only; an existing file keeps its bits,
    // matching a plain 0600 whole-file write.
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, PageStore) {
        let dir = TempDir::new().unwrap();
        let store = PageStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = store();
        let page = Page::new("TestPage", "some body\nwith lines");

        store.save(&page).unwrap();
        let loaded = store.load("TestPage").unwrap();

        assert_eq!(loaded, page);
    }

    #[test]
    fn save_replaces_previous_body() {
        let (_dir, store) = store();
        store.save(&Page::new("Home", "first")).unwrap();
        store.save(&Page::new("Home", "second")).unwrap();

        assert_eq!(store.load("Home").unwrap().body, "second");
    }

    #[test]
    fn load_missing_page_is_not_found() {
        let (_dir, store) = store();
        let err = store.load("Nowhere").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(title) if title == "Nowhere"));
    }

    #[test]
    fn list_titles_strips_suffix_and_skips_strays() {
        let (dir, store) = store();
        store.save(&Page::new("A", "a")).unwrap();
        store.save(&Page::new("B", "b")).unwrap();
        fs::write(dir.path().join("notes.md"), "not a page").unwrap();

        let mut titles = store.list_titles().unwrap();
        titles.sort();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[cfg(unix)]
    #[test]
    fn saved_files_are_owner_read_write_only() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, store) = store();
        store.save(&Page::new("Secret", "contents")).unwrap();

        let meta = fs::metadata(dir.path().join("Secret.txt")).unwrap();
        assert_eq!(meta.permissions().mode() & 0o777, 0o600);
    }
}
