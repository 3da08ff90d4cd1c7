use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::model::Document;

/// Page separator emitted by pdftotext and similar extractors.
const PAGE_BREAK: char = '\x0c';

/// Load every `.txt` / `.json` document in `dir`, ordered by file name.
pub fn load_dir(dir: &Path) -> Result<Vec<Document>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("cannot read pages directory {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_document(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let documents = paths
        .iter()
        .map(|p| load_file(p))
        .collect::<Result<Vec<_>>>()?;
    debug!(dir = %dir.display(), documents = documents.len(), "loaded documents");
    Ok(documents)
}

/// Load one document. `.txt` pages are split on form feeds; `.json` is
/// `{ "name"?: string, "pages": [string] }`.
pub fn load_file(path: &Path) -> Result<Document> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read document {}", path.display()))?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match extension(path).as_deref() {
        Some("txt") => Ok(Document::new(stem, split_pages(&raw))),
        Some("json") => {
            let mut doc: Document = serde_json::from_str(&raw)
                .with_context(|| format!("malformed document {}", path.display()))?;
            if doc.name.is_empty() {
                doc.name = stem;
            }
            Ok(doc)
        }
        _ => bail!("unsupported document type: {}", path.display()),
    }
}

fn split_pages(raw: &str) -> Vec<String> {
    let text = raw.replace("\r\n", "\n");
    let mut pages: Vec<String> = text.split(PAGE_BREAK).map(str::to_string).collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}

fn extension(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_lowercase())
}

fn is_document(path: &Path) -> bool {
    matches!(extension(path).as_deref(), Some("txt") | Some("json"))
}
