// crates/ports/src/stat.rs
use std::path::Path;

use file_meta_shared_kernel::{InfraResult, RawStat};

/// Port for taking a single stat snapshot of a path.
pub trait StatSource: Send + Sync {
    fn stat(&self, path: &Path, follow_links: bool) -> InfraResult<RawStat>;
}
