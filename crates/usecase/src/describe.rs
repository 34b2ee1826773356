// crates/usecase/src/describe.rs
use std::path::Path;

use file_meta_ports::{MetadataExtractor, StatSource};
use file_meta_shared_kernel::{FileInfo, Result};

/// Takes one stat snapshot of a path and runs the extractor over it.
pub struct DescribePath<'a> {
    stat_source: &'a dyn StatSource,
    extractor: &'a dyn MetadataExtractor,
    follow_links: bool,
}

impl<'a> DescribePath<'a> {
    pub fn new(stat_source: &'a dyn StatSource, extractor: &'a dyn MetadataExtractor, follow_links: bool) -> Self {
        Self { stat_source, extractor, follow_links }
    }

    pub fn run(&self, path: &Path) -> Result<FileInfo> {
        let stat = self.stat_source.stat(path, self.follow_links)?;
        log::debug!("stat {} ({} snapshot, {} bytes)", path.display(), stat.kind(), stat.size());

        let info = self.extractor.extract(&stat, &path.display().to_string())?;
        log::trace!("{}: {:?}", path.display(), info);
        Ok(info)
    }
}
