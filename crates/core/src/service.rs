// crates/core/src/service.rs
use std::path::Path;

use file_meta_domain::ExtractOptions;
use file_meta_infra::{FsStatSource, PlatformExtractor, default_extractor};
use file_meta_ports::MetadataExtractor;
use file_meta_shared_kernel::{ExtractionResult, FileInfo, RawStat, Result};
use file_meta_usecase::DescribePath;

/// Platform extractor wired to the real filesystem and account database.
///
/// Holds no per-call state; one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct FileMetadataService {
    extractor: PlatformExtractor,
    stat_source: FsStatSource,
    options: ExtractOptions,
}

impl FileMetadataService {
    pub fn new(options: ExtractOptions) -> Self {
        Self { extractor: default_extractor(options), stat_source: FsStatSource, options }
    }

    /// Stats `path` once and extracts its [`FileInfo`].
    pub fn describe(&self, path: &Path) -> Result<FileInfo> {
        DescribePath::new(&self.stat_source, &self.extractor, self.options.follow_links).run(path)
    }

    /// Extracts from a snapshot the caller already took.
    pub fn extract(&self, stat: &RawStat, display_name: &str) -> ExtractionResult<FileInfo> {
        self.extractor.extract(stat, display_name)
    }
}

impl Default for FileMetadataService {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}

/// One-shot [`FileMetadataService::describe`].
pub fn describe(path: &Path, options: ExtractOptions) -> Result<FileInfo> {
    FileMetadataService::new(options).describe(path)
}
