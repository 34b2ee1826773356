// crates/core/src/config.rs
use std::path::Path;

use file_meta_domain::ExtractOptions;
use file_meta_shared_kernel::{InfraResult, InfrastructureError};

/// Loads [`ExtractOptions`] from a JSON file; absent keys keep their defaults.
///
/// ```json
/// { "timezone": "utc", "follow_links": false }
/// ```
pub fn load_options(path: &Path) -> InfraResult<ExtractOptions> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| InfrastructureError::ConfigRead { path: path.to_path_buf(), source })?;
    parse_options(&text)
}

pub fn parse_options(text: &str) -> InfraResult<ExtractOptions> {
    Ok(serde_json::from_str(text)?)
}
