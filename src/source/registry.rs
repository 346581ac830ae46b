//! Source key registry
//!
//! Maps the accepted spellings of each source onto its key.

use super::SourceKey;

/// Accepted names for each source
static SYNONYMS: &[(SourceKey, &[&str])] = &[
    (SourceKey::Local, &["local", "fork", "mine", "self"]),
    (SourceKey::Upstream, &["upstream", "origin", "official", "main"]),
];

/// Normalize a raw value (trimmed, case-insensitive) to a key.
/// Absent, empty or unknown input gives `None`.
pub fn normalize_source_key(value: Option<&str>) -> Option<SourceKey> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    let name_lower = raw.to_lowercase();
    SYNONYMS.iter().find_map(|(key, names)| {
        if names.contains(&name_lower.as_str()) {
            Some(*key)
        } else {
            None
        }
    })
}

/// Accepted names for a key, canonical name first
pub fn synonyms(key: SourceKey) -> &'static [&'static str] {
    SYNONYMS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, names)| *names)
        .unwrap_or_default()
}

/// Every accepted name, comma separated, for error messages
pub fn accepted_names() -> String {
    SourceKey::ALL
        .iter()
        .flat_map(|key| synonyms(*key).iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_local_synonyms() {
        for name in ["local", "fork", "mine", "self"] {
            assert_eq!(normalize_source_key(Some(name)), Some(SourceKey::Local));
        }
    }

    #[test]
    fn test_normalize_upstream_synonyms() {
        for name in ["upstream", "origin", "official", "main"] {
            assert_eq!(normalize_source_key(Some(name)), Some(SourceKey::Upstream));
        }
    }

    #[test]
    fn test_normalize_case_and_whitespace() {
        assert_eq!(normalize_source_key(Some(" Local ")), Some(SourceKey::Local));
        assert_eq!(normalize_source_key(Some("LOCAL")), Some(SourceKey::Local));
        assert_eq!(normalize_source_key(Some("fork")), Some(SourceKey::Local));
        assert_eq!(
            normalize_source_key(Some("\tUPSTREAM\n")),
            Some(SourceKey::Upstream)
        );
    }

    #[test]
    fn test_normalize_no_match() {
        assert_eq!(normalize_source_key(None), None);
        assert_eq!(normalize_source_key(Some("")), None);
        assert_eq!(normalize_source_key(Some("   ")), None);
        assert_eq!(normalize_source_key(Some("loc al")), None);
        assert_eq!(normalize_source_key(Some("master")), None);
    }

    #[test]
    fn test_accepted_names_lists_table() {
        assert_eq!(
            accepted_names(),
            "local, fork, mine, self, upstream, origin, official, main"
        );
    }

    #[test]
    fn test_synonyms_canonical_first() {
        assert_eq!(synonyms(SourceKey::Local)[0], "local");
        assert_eq!(synonyms(SourceKey::Upstream)[0], "upstream");
    }
}
