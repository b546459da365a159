// ScanScope - core/filter.rs
//
// Composable record filter. All active filters are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.
//
// The checked flag lives in the app layer's annotation store, so callers
// pass it in per record rather than the filter reaching across layers.

use crate::core::model::ServiceRecord;
use crate::util::error::FilterError;
use regex::Regex;

/// Complete filter state. All fields are AND-combined when applied.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Case-insensitive substring over host, service, product, and
    /// version. Empty = no filter.
    pub text_search: String,

    /// Compiled regex over the same fields. None = no regex filter.
    pub regex_search: Option<Regex>,

    /// Show only records whose annotation is checked.
    pub checked_only: bool,
}

impl FilterState {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.text_search.is_empty() && self.regex_search.is_none() && !self.checked_only
    }

    /// Set the regex search pattern, compiling it.
    /// Returns an error if the pattern is invalid.
    pub fn set_regex(&mut self, pattern: &str) -> Result<(), FilterError> {
        if pattern.is_empty() {
            self.regex_search = None;
            return Ok(());
        }
        let regex = Regex::new(pattern).map_err(|e| FilterError::InvalidRegex {
            pattern: pattern.to_string(),
            source: e,
        })?;
        self.regex_search = Some(regex);
        Ok(())
    }
}

/// Check if a record matches all active filters.
///
/// `checked` is the record's current annotation flag; `text_lower` is the
/// pre-lowercased `text_search` (hoisted by the caller out of its loop).
pub fn matches_record(
    record: &ServiceRecord,
    checked: bool,
    filter: &FilterState,
    text_lower: &str,
) -> bool {
    if filter.checked_only && !checked {
        return false;
    }

    if !text_lower.is_empty() {
        let haystack = searchable_text(record).to_lowercase();
        if !haystack.contains(text_lower) {
            return false;
        }
    }

    if let Some(ref regex) = filter.regex_search {
        if !regex.is_match(&searchable_text(record)) {
            return false;
        }
    }

    true
}

/// The text the substring and regex filters run over.
fn searchable_text(record: &ServiceRecord) -> String {
    format!(
        "{} {} {} {} {}",
        record.host_address,
        record.port,
        record.service_label(),
        record.product,
        record.version
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(host: &str, port: u16, service: Option<&str>, product: &str) -> ServiceRecord {
        ServiceRecord {
            host_address: host.to_string(),
            port,
            service_name: service.map(str::to_string),
            product: product.to_string(),
            version: "N/A".to_string(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = FilterState::default();
        assert!(filter.is_empty());
        let r = record("10.0.0.5", 22, Some("ssh"), "OpenSSH");
        assert!(matches_record(&r, false, &filter, ""));
    }

    #[test]
    fn test_text_search_case_insensitive() {
        let filter = FilterState {
            text_search: "OPENSSH".to_string(),
            ..Default::default()
        };
        let text_lower = filter.text_search.to_lowercase();
        let hit = record("10.0.0.5", 22, Some("ssh"), "OpenSSH");
        let miss = record("10.0.0.6", 80, Some("http"), "nginx");
        assert!(matches_record(&hit, false, &filter, &text_lower));
        assert!(!matches_record(&miss, false, &filter, &text_lower));
    }

    #[test]
    fn test_text_search_covers_host_and_port() {
        let filter = FilterState {
            text_search: "10.0.0.5".to_string(),
            ..Default::default()
        };
        let text_lower = filter.text_search.to_lowercase();
        let r = record("10.0.0.5", 22, Some("ssh"), "OpenSSH");
        assert!(matches_record(&r, false, &filter, &text_lower));

        let by_port = FilterState {
            text_search: "443".to_string(),
            ..Default::default()
        };
        let https = record("10.0.0.5", 443, Some("https"), "N/A");
        assert!(matches_record(&https, false, &by_port, "443"));
    }

    #[test]
    fn test_regex_filter() {
        let mut filter = FilterState::default();
        filter.set_regex(r"OpenSSH \d+\.\d+").unwrap();
        let hit = ServiceRecord {
            host_address: "10.0.0.5".to_string(),
            port: 22,
            service_name: Some("ssh".to_string()),
            product: "OpenSSH 8.9".to_string(),
            version: "N/A".to_string(),
        };
        let miss = record("10.0.0.6", 80, Some("http"), "nginx");
        assert!(matches_record(&hit, false, &filter, ""));
        assert!(!matches_record(&miss, false, &filter, ""));
    }

    #[test]
    fn test_checked_only() {
        let filter = FilterState {
            checked_only: true,
            ..Default::default()
        };
        let r = record("10.0.0.5", 22, Some("ssh"), "OpenSSH");
        assert!(matches_record(&r, true, &filter, ""));
        assert!(!matches_record(&r, false, &filter, ""));
    }

    #[test]
    fn test_combined_filters() {
        let filter = FilterState {
            text_search: "ssh".to_string(),
            checked_only: true,
            ..Default::default()
        };
        let r = record("10.0.0.5", 22, Some("ssh"), "OpenSSH");
        assert!(matches_record(&r, true, &filter, "ssh"));
        assert!(!matches_record(&r, false, &filter, "ssh"), "unchecked fails AND");
    }

    #[test]
    fn test_invalid_regex() {
        let mut filter = FilterState::default();
        let result = filter.set_regex("[invalid");
        assert!(result.is_err());
    }

    #[test]
    fn test_clearing_regex() {
        let mut filter = FilterState::default();
        filter.set_regex("ssh").unwrap();
        assert!(filter.regex_search.is_some());
        filter.set_regex("").unwrap();
        assert!(filter.regex_search.is_none());
    }
}
