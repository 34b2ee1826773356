// src/presentation.rs
use std::path::Path;

use file_meta_core::FileInfo;
use serde::Serialize;

#[derive(Serialize)]
struct Record<'a> {
    path: &'a Path,
    #[serde(flatten)]
    info: &'a FileInfo,
}

/// One JSON object per entry: the path followed by the [`FileInfo`] fields.
pub fn render(path: &Path, info: &FileInfo, pretty: bool) -> serde_json::Result<String> {
    let record = Record { path, info };
    if pretty { serde_json::to_string_pretty(&record) } else { serde_json::to_string(&record) }
}
