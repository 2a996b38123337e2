// crates/bundle-report/src/assets.rs
// Scan a built dist/ directory into sized assets

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{ReportError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Wasm,
    Js,
    Css,
    Html,
    Other,
}

impl AssetKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("wasm") => AssetKind::Wasm,
            Some("js") | Some("mjs") => AssetKind::Js,
            Some("css") => AssetKind::Css,
            Some("html") | Some("htm") => AssetKind::Html,
            _ => AssetKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Wasm => "wasm",
            AssetKind::Js => "js",
            AssetKind::Css => "css",
            AssetKind::Html => "html",
            AssetKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    /// Path relative to the dist directory, '/'-separated
    pub path: String,
    pub size: u64,
    pub kind: AssetKind,
}

/// Collect every file under `dist` except those in `exclude`, largest first.
/// Paths are compared after resolving symlinks and `..` components.
pub fn scan(dist: &Path, exclude: &[PathBuf]) -> Result<Vec<Asset>> {
    if !dist.exists() {
        return Err(ReportError::MissingDist(dist.to_path_buf()));
    }
    if !dist.is_dir() {
        return Err(ReportError::NotADirectory(dist.to_path_buf()));
    }

    let exclude: Vec<PathBuf> = exclude.iter().filter_map(|p| resolve(p)).collect();
    let mut assets = Vec::new();

    for entry in WalkDir::new(dist).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let resolved = fs::canonicalize(entry.path())?;
        if exclude.contains(&resolved) {
            debug!(path = %entry.path().display(), "Skipping report output");
            continue;
        }

        let rel = entry.path().strip_prefix(dist).unwrap_or(entry.path());
        let size = entry.metadata()?.len();

        assets.push(Asset {
            path: to_slash(rel),
            size,
            kind: AssetKind::from_path(rel),
        });
    }

    assets.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
    debug!(count = assets.len(), dist = %dist.display(), "Scanned bundle");
    Ok(assets)
}

/// Canonical form of a path that may not exist yet. `None` when its parent
/// directory does not exist either, in which case it cannot be under dist.
fn resolve(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = fs::canonicalize(path) {
        return Some(resolved);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::canonicalize(parent).ok().map(|p| p.join(name))
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
