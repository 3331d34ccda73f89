//! Snapshot of every argument-free evaluation for one context

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// `EnvContext::fingerprint` of the evaluated context
    pub fingerprint: String,
    /// Predicate name → result, sorted by name
    pub predicates: BTreeMap<String, bool>,
}

impl Report {
    pub fn new(fingerprint: String, results: impl IntoIterator<Item = (String, bool)>) -> Self {
        Self {
            fingerprint,
            predicates: results.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.predicates.get(name).copied()
    }

    /// Names of the predicates that held
    pub fn matched(&self) -> impl Iterator<Item = &str> + '_ {
        self.predicates
            .iter()
            .filter(|(_, held)| **held)
            .map(|(name, _)| name.as_str())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn summary(&self) -> String {
        let matched: Vec<&str> = self.matched().collect();
        let short: String = self.fingerprint.chars().take(15).collect();
        format!(
            "Report[{}]: {} of {} held ({})",
            short,
            matched.len(),
            self.predicates.len(),
            matched.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report::new(
            "blake3:0123456789abcdef".to_string(),
            vec![
                ("online".to_string(), true),
                ("android".to_string(), false),
                ("desktop".to_string(), true),
            ],
        )
    }

    #[test]
    fn test_matched_is_sorted() {
        let report = sample();
        assert_eq!(report.matched().collect::<Vec<_>>(), vec!["desktop", "online"]);
        assert_eq!(report.get("android"), Some(false));
        assert_eq!(report.get("missing"), None);
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample();
        let json = report.to_json().unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            sample().summary(),
            "Report[blake3:01234567]: 2 of 3 held (desktop, online)"
        );
    }
}
