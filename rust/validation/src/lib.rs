// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Lotmodel Validation
//!
//! Consistency checking for spatial-model job payloads before they are
//! handed to the modeling engine.
//!
//! Each element's effective configuration is assembled from up to three
//! cascading levels (element override, then preset, then unresolved); the
//! combination of geometry kind, Z-source strategy and surface-model
//! strategy must then satisfy a compatibility matrix. The rule engine walks
//! the whole payload in one pass and reports every violation it finds; it
//! never fails fast and never raises for data errors.
//!
//! Validation is pure and reentrant: a single read-only pass over the
//! payload graph with pre-built id indexes, no retained caches, no I/O.
//! Callers treat a non-empty violation list as a hard stop.

pub mod builder;
pub mod resolve;
pub mod rules;
pub mod violation;

pub use builder::{BuildError, JobPayloadBuilder};
pub use resolve::{resolve_effective, EffectiveConfig};
pub use rules::validate;
pub use violation::{Rule, Violation, ViolationScope};
