//! # Static Site Serving
//!
//! Serves the compiled Leptos app from the dist directory.
//!
//! Files that exist are served as-is. Every other path gets `index.html` with a
//! `200` so deep links such as `/support` or `/account-deletion` boot the app and
//! let the client-side router pick the page (including its own 404 page).

use std::path::{Path, PathBuf};
use tower_http::services::{ServeDir, ServeFile};

/// Entry document of the web app inside the dist directory.
pub const INDEX_FILE: &str = "index.html";

/// Build the static file service with history-API fallback.
pub fn spa_service(dist_dir: impl AsRef<Path>) -> ServeDir<ServeFile> {
    let dist_dir = dist_dir.as_ref();
    ServeDir::new(dist_dir).fallback(ServeFile::new(index_path(dist_dir)))
}

/// Path of `index.html` inside `dist_dir`.
pub fn index_path(dist_dir: &Path) -> PathBuf {
    dist_dir.join(INDEX_FILE)
}
