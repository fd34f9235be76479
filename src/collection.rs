use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DigestError, Result};
use crate::extract::PageSource;
use crate::pipeline::Pipeline;
use crate::report::{CollectionInput, CollectionResult};
use crate::settings::Settings;

/// One unit of work: a configuration file plus its document directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub name: String,
    pub input_path: PathBuf,
    pub documents_dir: PathBuf,
    pub output_path: PathBuf,
}

impl Collection {
    /// Resolve the collection rooted at `dir`, if both the input file and the
    /// document directory exist.
    pub fn at(dir: &Path, settings: &Settings) -> Option<Collection> {
        let input_path = dir.join(&settings.input_file);
        let documents_dir = dir.join(&settings.documents_dir);
        if !input_path.is_file() || !documents_dir.is_dir() {
            return None;
        }
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());
        Some(Collection {
            name,
            output_path: dir.join(&settings.output_file),
            input_path,
            documents_dir,
        })
    }

    pub fn load_input(&self) -> Result<CollectionInput> {
        let raw = fs::read_to_string(&self.input_path).map_err(|e| DigestError::io(&self.input_path, e))?;
        serde_json::from_str(&raw).map_err(|source| DigestError::InvalidConfig {
            path: self.input_path.clone(),
            source,
        })
    }

    pub fn documents(&self, extension: &str) -> Result<Vec<PathBuf>> {
        list_documents(&self.documents_dir, extension)
    }

    /// Load, analyse, and return the result without writing it.
    pub fn analyze(&self, settings: &Settings, source: &dyn PageSource) -> Result<CollectionResult> {
        let input = self.load_input()?;
        let documents = self.documents(&settings.document_extension)?;
        debug!(collection = %self.name, documents = documents.len(), "Loaded collection");
        Ok(Pipeline::new(source).parallel(settings.parallel).run(&input, &documents))
    }

    pub fn write(&self, result: &CollectionResult) -> Result<()> {
        write_result(&self.output_path, result)
    }
}

/// Every subdirectory of `root` whose name starts with the collection prefix
/// (any case) and holds a complete collection, sorted by name.
pub fn discover(root: &Path, settings: &Settings) -> Result<Vec<Collection>> {
    let prefix = settings.collection_prefix.to_lowercase();
    let mut found = Vec::new();

    for entry in fs::read_dir(root).map_err(|e| DigestError::io(root, e))? {
        let entry = entry.map_err(|e| DigestError::io(root, e))?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if !path.is_dir() || !name.starts_with(&prefix) {
            continue;
        }
        match Collection::at(&path, settings) {
            Some(c) => found.push(c),
            None => debug!("{:?} is missing its input file or document directory", path),
        }
    }

    if found.is_empty() {
        return Err(DigestError::NoCollections {
            root: root.to_path_buf(),
        });
    }
    found.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(found)
}

/// Document files with the given extension, sorted by file name.
pub fn list_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut docs: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| DigestError::io(dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == extension))
        .collect();
    docs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(docs)
}

pub fn write_result(path: &Path, result: &CollectionResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).map_err(|source| DigestError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|e| DigestError::io(path, e))
}

// ── Tests ──
