// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use runner_record::prelude::*;
//! ```

pub use uuid::Uuid;

pub use crate::{Runner, RunnerRepository, UpdateRunnerRequest, async_trait};
