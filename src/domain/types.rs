//! Shared identifier types

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Newtype wrapper for normalized city slugs (e.g. `new_york_ny`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(String);

impl CityId {
    /// Wrap an already-normalized slug as-is
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Build the slug from a city name and state code.
    ///
    /// The name is lowercased, spaces and hyphens become underscores and
    /// periods are dropped, then the lowercased state code is appended:
    /// `("St. Louis", "MO")` becomes `st_louis_mo`.
    pub fn from_parts(city_name: &str, state_code: &str) -> Self {
        let name: String = city_name
            .trim()
            .to_lowercase()
            .chars()
            .filter_map(|c| match c {
                ' ' | '-' => Some('_'),
                '.' => None,
                c => Some(c),
            })
            .collect();
        Self(format!("{}_{}", name, state_code.trim().to_lowercase()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trailing two-letter segment as an upper-case state code, if present
    pub fn state_code(&self) -> Option<String> {
        let (_, suffix) = self.0.rsplit_once('_')?;
        (suffix.len() == 2 && suffix.chars().all(|c| c.is_ascii_alphabetic()))
            .then(|| suffix.to_ascii_uppercase())
    }

    /// Human-readable fallback when no display name is known:
    /// `grand_forks_nd` becomes `Grand Forks Nd`
    pub fn title_case(&self) -> String {
        self.0
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CityId {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl AsRef<str> for CityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_spaces() {
        assert_eq!(CityId::from_parts("New York", "NY").as_str(), "new_york_ny");
    }

    #[test]
    fn test_from_parts_periods_and_hyphens() {
        assert_eq!(CityId::from_parts("St. Louis", "MO").as_str(), "st_louis_mo");
        assert_eq!(CityId::from_parts("Winston-Salem", "NC").as_str(), "winston_salem_nc");
        assert_eq!(CityId::from_parts("  Fargo ", " nd").as_str(), "fargo_nd");
    }

    #[test]
    fn test_state_code() {
        assert_eq!(CityId::new("grand_forks_nd").state_code().as_deref(), Some("ND"));
        assert_eq!(CityId::new("nowhere").state_code(), None);
        assert_eq!(CityId::new("odd_slug_123").state_code(), None);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(CityId::new("grand_forks_nd").title_case(), "Grand Forks Nd");
        assert_eq!(CityId::new("chicago_il").title_case(), "Chicago Il");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&CityId::new("chicago_il")).unwrap();
        assert_eq!(json, "\"chicago_il\"");
    }
}
