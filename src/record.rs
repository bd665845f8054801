// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The `Runner` record type.

/// A runner entry with two independently settable, optional attributes.
///
/// `Runner` is a plain data carrier: it performs no validation, exposes no
/// computed behavior, and owns no identity. Identity and lifecycle belong
/// to the store behind [`RunnerRepository`](crate::RunnerRepository); the
/// record is passed to it whole.
///
/// # Example
///
/// ```rust
/// use runner_record::Runner;
///
/// let runner = Runner {
///     name:     Some("Alice".to_string()),
///     position: Some(3)
/// };
/// assert_eq!(runner.name.as_deref(), Some("Alice"));
/// assert_eq!(runner.position, Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Runner {
    /// Display name. Any string or absence of value is accepted.
    pub name: Option<String>,

    /// Ordering/ranking slot. Any value or absence of value is accepted.
    pub position: Option<i64>
}

impl Runner {
    /// Create a record with both attributes unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use runner_record::Runner;
    ///
    /// let runner = Runner::new();
    /// assert!(runner.name.is_none());
    /// assert!(runner.position.is_none());
    /// ```
    pub const fn new() -> Self {
        Self {
            name:     None,
            position: None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_both_attributes_unset() {
        let runner = Runner::new();
        assert!(runner.name.is_none());
        assert!(runner.position.is_none());
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(Runner::default(), Runner::new());
    }

    #[test]
    fn name_reads_back_as_set() {
        let mut runner = Runner::new();
        runner.name = Some("Alice".to_string());
        assert_eq!(runner.name.as_deref(), Some("Alice"));
        assert!(runner.position.is_none());
    }

    #[test]
    fn position_reads_back_as_set() {
        let mut runner = Runner::new();
        runner.position = Some(3);
        assert_eq!(runner.position, Some(3));
        assert!(runner.name.is_none());
    }

    #[test]
    fn attributes_are_independently_settable() {
        let mut runner = Runner::new();
        runner.name = Some("Alice".to_string());
        runner.position = Some(3);
        runner.name = None;
        assert!(runner.name.is_none());
        assert_eq!(runner.position, Some(3));
    }

    #[test]
    fn independently_constructed_records_do_not_alias() {
        let mut first = Runner::new();
        let second = Runner::new();
        first.name = Some("Alice".to_string());
        assert!(second.name.is_none());
        assert_ne!(first, second);
    }

    #[test]
    fn clone_is_a_distinct_value() {
        let mut original = Runner {
            name:     Some("Alice".to_string()),
            position: Some(3)
        };
        let copy = original.clone();
        original.position = Some(7);
        assert_eq!(copy.position, Some(3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_preserves_unset_attributes() {
        let runner = Runner {
            name:     Some("Alice".to_string()),
            position: None
        };
        let json = serde_json::to_string(&runner).expect("serialize");
        let back: Runner = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, runner);
    }
}
