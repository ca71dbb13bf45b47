//! Test helpers for writing request and lexicon fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// Create a temporary workspace and return it with its UTF-8 root.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// A request ranking a loud bar, a neutral cafe and a quiet study spot for a
/// visitor who wants a quiet, focused venue.
pub(super) fn sample_request() -> Value {
    json!({
        "preferences": {"noiseLevel": 20, "cozyFactor": 50, "focusLevel": 90},
        "venues": [
            {
                "id": "party",
                "name": "Party Bar",
                "summaries": {"medium": "A lively, packed bar scene with dancing"},
                "attributes": {"NoiseLevel": "very_loud", "HasTV": true}
            },
            {"id": "cafe", "name": "Neutral Cafe"},
            {
                "id": "study",
                "name": "Study Spot",
                "attributes": {"NoiseLevel": "quiet", "WiFi": "free"}
            }
        ]
    })
}

/// Write [`sample_request`] into `path`.
pub(super) fn write_sample_request(path: &Utf8Path) {
    let payload = serde_json::to_string_pretty(&sample_request()).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}
