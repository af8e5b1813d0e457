use serde::Serialize;
use std::fmt;

/// A name reduced to uppercase ASCII letters. May be empty.
///
/// The only ways to build one are [`crate::normalize::normalize_name`] and
/// [`NormalizedName::parse`], so the `[A-Z]*` invariant always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedName(String);

impl NormalizedName {
    pub(crate) fn from_letters(letters: String) -> Self {
        debug_assert!(letters.bytes().all(|b| b.is_ascii_uppercase()));
        Self(letters)
    }

    /// Accept a string that is already normalized, reject anything else
    pub fn parse(value: &str) -> Option<Self> {
        if value.bytes().all(|b| b.is_ascii_uppercase()) {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Normalized names in ascending byte order.
///
/// Built by [`crate::ranking::rank`]; adjacent entries always satisfy `a <= b`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedSequence(Vec<NormalizedName>);

impl RankedSequence {
    pub(crate) fn from_sorted(names: Vec<NormalizedName>) -> Self {
        debug_assert!(names.windows(2).all(|w| w[0] <= w[1]));
        Self(names)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedName> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[NormalizedName] {
        &self.0
    }

    /// Names paired with their 1-based rank
    pub fn positioned(&self) -> impl Iterator<Item = PositionedName<'_>> {
        self.0.iter().enumerate().map(|(i, name)| PositionedName {
            name,
            position: i as u64 + 1,
        })
    }

    pub fn into_inner(self) -> Vec<NormalizedName> {
        self.0
    }
}

/// A ranked name and its 1-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedName<'a> {
    pub name: &'a NormalizedName,
    pub position: u64,
}
