// crates/ports/src/extractor.rs
use file_meta_shared_kernel::{ExtractionResult, FileInfo, RawStat};

/// Port for a platform backend turning one stat snapshot into a [`FileInfo`].
///
/// `display_name` only appears in error messages. Extraction is
/// all-or-nothing: either a complete record or the first failure.
pub trait MetadataExtractor: Send + Sync {
    fn extract(&self, stat: &RawStat, display_name: &str) -> ExtractionResult<FileInfo>;
}

impl<E: MetadataExtractor + ?Sized> MetadataExtractor for Box<E> {
    fn extract(&self, stat: &RawStat, display_name: &str) -> ExtractionResult<FileInfo> {
        (**self).extract(stat, display_name)
    }
}
