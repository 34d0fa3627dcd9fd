//! Test helpers for staging CLI input files in a temporary workspace.

use camino::{Utf8Path, Utf8PathBuf};
use pathway_core::Responses;
use tempfile::TempDir;

/// A temporary directory addressed through UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `contents` to `name` and return the full path.
    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents);
        path
    }

    /// Serialise `responses` to `name` and return the full path.
    pub(super) fn write_responses(&self, name: &str, responses: &Responses) -> Utf8PathBuf {
        let json = serde_json::to_string_pretty(responses).expect("serialise responses");
        self.write(name, &json)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &str) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Decode bytes captured from a command writer as JSON.
pub(super) fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).expect("command output should be JSON")
}
