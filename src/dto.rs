// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Request payloads for repository operations.

/// Request DTO for partially updating a stored runner.
///
/// `Some` sets the attribute to the contained value, `None` leaves it
/// unchanged. Clearing an already-set attribute is out of scope for a
/// partial update; write the full record instead.
///
/// # Example
///
/// ```rust
/// use runner_record::UpdateRunnerRequest;
///
/// let dto = UpdateRunnerRequest {
///     position: Some(1),
///     ..UpdateRunnerRequest::default()
/// };
/// assert!(dto.name.is_none());
/// assert_eq!(dto.position, Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateRunnerRequest {
    /// New display name, or `None` to leave the stored name unchanged.
    pub name: Option<String>,

    /// New ranking slot, or `None` to leave the stored position unchanged.
    pub position: Option<i64>
}

impl UpdateRunnerRequest {
    /// Check whether this payload changes anything.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none()
    }
}
