// crates/domain/src/options.rs
use std::str::FromStr;

use serde::Deserialize;

/// Time zone the normalized timestamps are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZonePolicy {
    /// The process's configured local zone (`TZ`, `/etc/localtime`).
    #[default]
    Local,
    Utc,
}

impl FromStr for TimeZonePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" | "z" => Ok(Self::Utc),
            other => Err(format!("Unknown time zone policy: {other}")),
        }
    }
}

/// Settings shared by the extraction backends and the stat capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub timezone: TimeZonePolicy,
    /// Stat the link target rather than the link itself.
    pub follow_links: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { timezone: TimeZonePolicy::Local, follow_links: true }
    }
}

impl ExtractOptions {
    #[must_use]
    pub fn with_timezone(mut self, timezone: TimeZonePolicy) -> Self {
        self.timezone = timezone;
        self
    }

    #[must_use]
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policies_case_insensitively() {
        assert_eq!("UTC".parse::<TimeZonePolicy>(), Ok(TimeZonePolicy::Utc));
        assert_eq!(" local ".parse::<TimeZonePolicy>(), Ok(TimeZonePolicy::Local));
        assert!("mars".parse::<TimeZonePolicy>().is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let opts: ExtractOptions = serde_json::from_str(r#"{"timezone":"utc"}"#).unwrap();
        assert_eq!(opts.timezone, TimeZonePolicy::Utc);
        assert!(opts.follow_links);
    }
}
