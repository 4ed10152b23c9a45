use std::path::PathBuf;

/// Shared application state passed to all route handlers. The store reads
/// straight from disk per request, so the root path is all there is to share.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}
