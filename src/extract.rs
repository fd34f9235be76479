use std::collections::BTreeMap;
use std::path::Path;

use lopdf::Document;
use tracing::{debug, warn};

use crate::error::{DigestError, Result};

/// Page number (1-based) → raw page text.
pub type PageMap = BTreeMap<u32, String>;

/// Turns one document file into per-page text.
///
/// Implementations never fail past this boundary: an unreadable document is
/// logged and comes back as an empty map.
pub trait PageSource: Sync {
    fn pages(&self, path: &Path) -> PageMap;
}

/// PDF text extraction backed by lopdf.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfPages;

impl PdfPages {
    pub fn load(path: &Path) -> Result<PageMap> {
        let doc = Document::load(path).map_err(|source| DigestError::Pdf {
            path: path.to_path_buf(),
            source,
        })?;

        let mut pages = PageMap::new();
        for &page_num in doc.get_pages().keys() {
            // a page that fails to decode is kept as an empty page
            let text = match doc.extract_text(&[page_num]) {
                Ok(t) => t,
                Err(e) => {
                    debug!("page {} of {:?} has no extractable text: {}", page_num, path, e);
                    String::new()
                }
            };
            pages.insert(page_num, text);
        }
        Ok(pages)
    }
}

impl PageSource for PdfPages {
    fn pages(&self, path: &Path) -> PageMap {
        match Self::load(path) {
            Ok(pages) => pages,
            Err(e) => {
                warn!("Skipping document: {}", e);
                PageMap::new()
            }
        }
    }
}

/// In-memory pages keyed by file name, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPages {
    docs: std::collections::HashMap<String, PageMap>,
}

#[cfg(test)]
impl MemoryPages {
    pub fn with(mut self, file_name: &str, pages: &[(u32, &str)]) -> Self {
        let map = pages.iter().map(|(n, t)| (*n, t.to_string())).collect();
        self.docs.insert(file_name.to_string(), map);
        self
    }
}

#[cfg(test)]
impl PageSource for MemoryPages {
    fn pages(&self, path: &Path) -> PageMap {
        path.file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| self.docs.get(n))
            .cloned()
            .unwrap_or_default()
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_pdf_is_an_error() {
        let err = PdfPages::load(Path::new("tests/fixtures/does_not_exist.pdf")).unwrap_err();
        assert!(matches!(err, DigestError::Pdf { .. }));
    }

    #[test]
    fn unreadable_pdf_yields_no_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"not really a pdf").unwrap();
        assert!(PdfPages.pages(&path).is_empty());
    }

    #[test]
    fn memory_pages_by_file_name() {
        let source = MemoryPages::default().with("a.pdf", &[(1, "one"), (3, "three")]);
        let pages = source.pages(Path::new("/some/dir/a.pdf"));
        assert_eq!(pages.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert!(source.pages(Path::new("b.pdf")).is_empty());
    }
}
