//! Contract Type Registry — the closed set of contract types the service can draft,
//! and the selection check that runs against it.

use std::collections::BTreeMap;

/// Message returned for any code that is not in the registry.
pub const INVALID_SELECTION_MESSAGE: &str = "잘못된 선택입니다. 1, 2, 3 중에서 선택해 주세요.";

/// Fixed code → display-name table. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct ContractRegistry {
    types: BTreeMap<String, String>,
}

/// Outcome of checking a submitted code. An unknown code is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    Valid { code: &'a str, name: &'a str },
    Invalid,
}

impl Selection<'_> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Selection::Valid { .. })
    }

    /// User-facing confirmation or rejection text.
    pub fn message(&self) -> String {
        match self {
            Selection::Valid { name, .. } => format!(
                "선택하신 계약서는 '{name}'입니다. 이어지는 계약서 예시 샘플을 확인해 주세요"
            ),
            Selection::Invalid => INVALID_SELECTION_MESSAGE.to_string(),
        }
    }
}

impl ContractRegistry {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            types: entries
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }

    /// Checks `code` against the registry. Input is not trimmed or normalised.
    pub fn validate<'a>(&'a self, code: &str) -> Selection<'a> {
        match self.types.get_key_value(code) {
            Some((code, name)) => Selection::Valid { code, name },
            None => Selection::Invalid,
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }
}

impl Default for ContractRegistry {
    fn default() -> Self {
        Self::new([
            ("1", "부동산임대차계약서"),
            ("2", "위임장"),
            ("3", "소장"),
        ])
    }
}
