//! Local content serving via custom protocol.
//!
//! Registers a `pixel://` custom protocol so that WebViews can load the
//! bundled pages and sprite images without a local HTTP server.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Serves in-memory pages plus files from a base directory.
///
/// A request for `pixel://localhost/duck-left.gif` resolves to
/// `{base_dir}/duck-left.gif`; in-memory overrides win over the filesystem.
pub struct ContentProvider {
    base_dir: PathBuf,
    overrides: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Register an in-memory asset.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to MIME type and content bytes.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.split(['?', '#']).next().unwrap_or("").trim_start_matches('/');

        if let Some((mime, data)) = self.overrides.get(clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }
        if clean.is_empty() {
            return None;
        }

        // Canonicalize both sides so `..` and symlinks cannot escape.
        let file_path = self.base_dir.join(clean);
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Borrowed(mime), Cow::Owned(data)))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_with_files() -> (tempfile::TempDir, ContentProvider) {
        let root = tempfile::tempdir().unwrap();
        let assets = root.path().join("assets");
        std::fs::create_dir(&assets).unwrap();
        std::fs::write(assets.join("duck-left.gif"), b"GIF89a").unwrap();
        std::fs::write(root.path().join("secret.txt"), b"nope").unwrap();
        let cp = ContentProvider::new(&assets);
        (root, cp)
    }

    #[test]
    fn resolves_file_from_base_dir() {
        let (_root, cp) = provider_with_files();
        let (mime, data) = cp.resolve("duck-left.gif").unwrap();
        assert_eq!(mime.as_ref(), "image/gif");
        assert_eq!(data.as_ref(), b"GIF89a");
    }

    #[test]
    fn leading_slash_and_query_are_ignored() {
        let (_root, cp) = provider_with_files();
        assert!(cp.resolve("/duck-left.gif?v=2").is_some());
    }

    #[test]
    fn traversal_with_dotdot_is_blocked() {
        let (_root, cp) = provider_with_files();
        assert!(cp.resolve("../secret.txt").is_none());
        assert!(cp.resolve("sub/../../secret.txt").is_none());
    }

    #[test]
    fn absolute_path_is_blocked() {
        let (_root, cp) = provider_with_files();
        assert!(cp.resolve("/etc/passwd").is_none());
    }

    #[test]
    fn directory_and_missing_file_return_none() {
        let (_root, cp) = provider_with_files();
        assert!(cp.resolve("").is_none());
        assert!(cp.resolve("missing.png").is_none());
    }

    #[test]
    fn override_takes_precedence() {
        let (_root, mut cp) = provider_with_files();
        cp.add_override("duck-left.gif", "image/gif", b"override".to_vec());
        let (_, data) = cp.resolve("duck-left.gif").unwrap();
        assert_eq!(data.as_ref(), b"override");
    }

    #[test]
    fn override_without_base_dir() {
        let mut cp = ContentProvider::new("/nonexistent/pixel/assets");
        cp.add_override("overlay.html", "text/html", b"<html></html>".to_vec());
        let (mime, _) = cp.resolve("overlay.html").unwrap();
        assert_eq!(mime.as_ref(), "text/html");
        assert!(cp.resolve("duck-left.gif").is_none());
    }

    #[test]
    fn mime_types() {
        assert_eq!(mime_from_extension(Path::new("a.html")), "text/html");
        assert_eq!(mime_from_extension(Path::new("a.png")), "image/png");
        assert_eq!(mime_from_extension(Path::new("a.gif")), "image/gif");
        assert_eq!(
            mime_from_extension(Path::new("a.xyz")),
            "application/octet-stream"
        );
    }
}
