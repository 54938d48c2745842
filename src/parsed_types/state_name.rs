//! Contains state names via the [`StateName`] type.

use internment::Intern;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

/// The name of a state in a state space description. Names are interned, so
/// they are cheap to copy and compare for equality. Ordering is always the
/// lexicographic ordering of the underlying strings, which is what the search
/// engines use to break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateName(Intern<String>);

impl StateName {
    #[inline(always)]
    pub fn new(name: &str) -> Self {
        Self(Intern::new(name.to_string()))
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for StateName {
    #[inline(always)]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StateName {
    #[inline(always)]
    fn from(value: String) -> Self {
        Self(Intern::new(value))
    }
}

impl AsRef<str> for StateName {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for StateName {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialOrd for StateName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StateName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Display for StateName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StateName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_names_are_equal() {
        assert_eq!(StateName::new("Pula"), StateName::from("Pula"));
        assert_ne!(StateName::new("Pula"), StateName::new("Buje"));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut names = vec![
            StateName::new("Pula"),
            StateName::new("Buje"),
            StateName::new("Umag"),
            StateName::new("Baderna"),
        ];
        names.sort();
        let names: Vec<&str> = names.iter().map(|name| name.as_str()).collect();
        assert_eq!(names, vec!["Baderna", "Buje", "Pula", "Umag"]);
    }
}
