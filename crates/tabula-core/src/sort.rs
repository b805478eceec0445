//! Normalized sort specifications.
//!
//! Whatever shape the caller hands over (nothing, one name, a list of names),
//! it is turned into one [`SortSpec`]: an ordered tuple of sort keys. A key is
//! a column name, optionally prefixed with `-` for descending order.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One parsed entry of a [`SortSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey<'a> {
    pub column: &'a str,
    pub direction: SortDirection,
}

impl<'a> SortKey<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.strip_prefix('-') {
            Some(column) => SortKey {
                column,
                direction: SortDirection::Descending,
            },
            None => SortKey {
                column: raw,
                direction: SortDirection::Ascending,
            },
        }
    }

    pub fn is_descending(&self) -> bool {
        self.direction == SortDirection::Descending
    }
}

/// Ordered tuple of sort keys. Empty means "no explicit sort".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortSpec(Vec<String>);

impl SortSpec {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Normalize any accepted input shape into a sort spec.
    pub fn normalize(input: impl Into<SortSpec>) -> Self {
        input.into()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Raw keys, including any `-` prefixes.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn keys(&self) -> impl Iterator<Item = SortKey<'_>> + '_ {
        self.0.iter().map(|raw| SortKey::parse(raw))
    }

    fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// A lone name; the empty string means no sort.
    fn from_single(name: String) -> Self {
        if name.is_empty() {
            Self::empty()
        } else {
            Self(vec![name])
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}

impl From<()> for SortSpec {
    fn from(_: ()) -> Self {
        SortSpec::empty()
    }
}

impl From<&str> for SortSpec {
    fn from(name: &str) -> Self {
        SortSpec::from_single(name.to_string())
    }
}

impl From<String> for SortSpec {
    fn from(name: String) -> Self {
        SortSpec::from_single(name)
    }
}

impl From<&String> for SortSpec {
    fn from(name: &String) -> Self {
        SortSpec::from_single(name.clone())
    }
}

impl From<&[&str]> for SortSpec {
    fn from(names: &[&str]) -> Self {
        SortSpec::from_names(names.iter().copied())
    }
}

impl From<&[String]> for SortSpec {
    fn from(names: &[String]) -> Self {
        SortSpec::from_names(names.iter().cloned())
    }
}

impl<const N: usize> From<[&str; N]> for SortSpec {
    fn from(names: [&str; N]) -> Self {
        SortSpec::from_names(names)
    }
}

impl From<Vec<&str>> for SortSpec {
    fn from(names: Vec<&str>) -> Self {
        SortSpec::from_names(names)
    }
}

impl From<Vec<String>> for SortSpec {
    fn from(names: Vec<String>) -> Self {
        SortSpec::from_names(names)
    }
}

impl From<&SortSpec> for SortSpec {
    fn from(spec: &SortSpec) -> Self {
        spec.clone()
    }
}

impl<T: Into<SortSpec>> From<Option<T>> for SortSpec {
    fn from(input: Option<T>) -> Self {
        input.map(Into::into).unwrap_or_default()
    }
}
