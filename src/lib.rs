// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runner record type with repository traits for externally managed
//! persistence.
//!
//! This crate provides the passive [`Runner`] record and the
//! [`RunnerRepository`] trait that models the persistence collaborator the
//! record is handed to. The record itself holds no lifecycle logic:
//! creation, mutation, save, and deletion are all driven by whichever
//! store implements the repository trait.
//!
//! # Overview
//!
//! - [`Runner`] — Plain data carrier with two optional attributes
//! - [`UpdateRunnerRequest`] — Partial-update payload for stored records
//! - [`RunnerRepository`] — Async boundary to the external store
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! ```rust
//! use runner_record::Runner;
//!
//! let mut runner = Runner::new();
//! assert!(runner.name.is_none());
//! assert!(runner.position.is_none());
//!
//! runner.name = Some("Alice".to_string());
//! runner.position = Some(3);
//! ```
//!
//! Persistence stays behind the trait:
//!
//! ```rust,ignore
//! use runner_record::prelude::*;
//!
//! async fn promote<R: RunnerRepository>(repo: &R, id: Uuid) -> Result<Runner, R::Error> {
//!     repo.update(id, UpdateRunnerRequest {
//!         position: Some(1),
//!         ..UpdateRunnerRequest::default()
//!     })
//!     .await
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dto;
pub mod prelude;
pub mod record;
pub mod repository;

/// Re-export async_trait for repository implementations.
pub use async_trait::async_trait;
pub use dto::UpdateRunnerRequest;
pub use record::Runner;
pub use repository::RunnerRepository;
