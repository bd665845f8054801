// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Repository boundary to the external runner store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{Runner, UpdateRunnerRequest};

/// Repository trait for [`Runner`] persistence operations.
///
/// The store behind this trait owns the record lifecycle: it mints
/// identifiers, holds the canonical copies, and defines the error
/// taxonomy. The crate only describes the boundary.
///
/// # Example
///
/// ```rust,ignore
/// use runner_record::prelude::*;
///
/// #[async_trait]
/// impl RunnerRepository for PgStore {
///     type Error = sqlx::Error;
///     // ...
/// }
/// ```
#[async_trait]
pub trait RunnerRepository: Send + Sync {
    /// Error type for repository operations.
    type Error: std::error::Error + Send + Sync;

    /// Hand a record to the store.
    ///
    /// Returns the identifier the store assigned to it.
    async fn create(&self, record: Runner) -> Result<Uuid, Self::Error>;

    /// Find a stored record by ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Runner>, Self::Error>;

    /// Partially update a stored record.
    ///
    /// Returns the record as stored after the update.
    async fn update(&self, id: Uuid, dto: UpdateRunnerRequest) -> Result<Runner, Self::Error>;

    /// Delete a stored record by ID.
    ///
    /// Returns `true` if a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, Self::Error>;

    /// List stored records with pagination.
    ///
    /// Records are ordered by `position` ascending with unset positions
    /// last.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Runner>, Self::Error>;
}
