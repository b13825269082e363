// src/static_files.rs
//
// responsibilities:
//  * StaticFiles collaborator contract: path in, (content type, bytes) out
//  * StaticDir: filesystem implementation with a traversal guard

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

pub struct StaticContent {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Serves non-dynamic content by request path. The connection handler
/// delegates here after a dispatch miss; `None` means no match and the
/// request falls through to 404.
pub trait StaticFiles: Send + Sync {
    fn lookup(&self, path: &str) -> Option<StaticContent>;
}

/// Never matches. Used when no static directory is configured.
pub struct NoStaticFiles;

impl StaticFiles for NoStaticFiles {
    fn lookup(&self, _path: &str) -> Option<StaticContent> {
        None
    }
}

pub struct StaticDir {
    root: PathBuf,
}

impl StaticDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl StaticFiles for StaticDir {
    fn lookup(&self, path: &str) -> Option<StaticContent> {
        let full_path = sanitize_path(&self.root, path)?;
        if !full_path.is_file() {
            return None;
        }

        let bytes = match fs::read(&full_path) {
            Ok(b) => b,
            Err(e) => {
                warn!(path = %full_path.display(), error = %e, "failed to read static file");
                return None;
            }
        };

        Some(StaticContent {
            content_type: content_type_for(path),
            bytes,
        })
    }
}

/// Prevent directory traversal: the canonicalized candidate must stay under
/// the canonicalized root.
fn sanitize_path(root: &Path, req_path: &str) -> Option<PathBuf> {
    let candidate = root.join(req_path.strip_prefix('/').unwrap_or(req_path));
    let canonical = candidate.canonicalize().ok()?;
    let root = root.canonicalize().ok()?;
    if canonical.starts_with(&root) {
        Some(canonical)
    } else {
        None
    }
}

fn content_type_for(path: &str) -> &'static str {
    let extension = match path.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => return "text/plain",
    };

    match extension {
        "htm" | "html" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "gif" => "image/gif",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "svg" => "image/svg+xml",
        "json" => "application/json",
        "txt" => "text/plain",
        _ => "text/plain",
    }
}
