// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interaction effects and their cascading parameter defaults.
//!
//! An interaction effect describes how one element is trimmed or altered
//! relative to another at a shared boundary. Effects persist as one JSON
//! object each inside a JSON array field; a missing args field (or missing
//! members inside it) means "apply the action's defaults", never "zero".
//!
//! [`resolve_args`] produces a fresh args value with defaults filled in per
//! action. The persisted input is never mutated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{BoundaryReference, EffectTarget, InteractionAction};

/// One ordered interaction rule carried by a preset or element override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InteractionEffect {
    /// Stable key for tracking effects inside the persisted JSON array.
    pub effect_id: Uuid,
    /// Position within the owning effect list.
    pub order_id: i32,

    pub target: EffectTarget,
    pub action: InteractionAction,

    /// Persisted action-specific parameters. `None` means defaults apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<InteractionEffectArgs>,
}

impl InteractionEffect {
    pub fn new(order_id: i32, target: EffectTarget, action: InteractionAction) -> Self {
        Self {
            effect_id: Uuid::new_v4(),
            order_id,
            target,
            action,
            args: None,
        }
    }

    /// Returns args with this action's defaults applied. Not intended to be
    /// persisted back.
    pub fn effective_args(&self, profile: &InteractionDefaultsProfile) -> InteractionEffectArgs {
        resolve_args(self.action, self.args.as_ref(), profile)
    }
}

/// Single stable persisted args shape. Only a subset of fields is meaningful
/// per action; the rest are carried untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InteractionEffectArgs {
    // Common knobs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearance_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<BoundaryReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub through_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    // Terminate / TrimToBoundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_inside: Option<bool>,

    // AddOpening / SubtractVolume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_oversize_m: Option<f64>,

    // StepOver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_delta_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_cover_m: Option<f64>,
}

impl InteractionEffectArgs {
    /// Field-level constraint checks, independent of the defaults cascade.
    ///
    /// Returns one message per broken constraint; an empty list means the
    /// args are acceptable for `action`.
    pub fn validate(&self, action: InteractionAction) -> Vec<String> {
        let mut errors = Vec::new();

        if self.clearance_m.is_some_and(|v| v < 0.0) {
            errors.push("ClearanceM must be >= 0.".to_owned());
        }
        if self.offset_m.is_some_and(|v| v < 0.0) {
            errors.push("OffsetM must be >= 0.".to_owned());
        }
        if self.opening_oversize_m.is_some_and(|v| v < 0.0) {
            errors.push("OpeningOversizeM must be >= 0.".to_owned());
        }
        if self.min_cover_m.is_some_and(|v| v < 0.0) {
            errors.push("MinCoverM must be >= 0.".to_owned());
        }

        if action == InteractionAction::StepOver && self.step_delta_m == Some(0.0) {
            errors.push("StepDeltaM cannot be 0 for StepOver.".to_owned());
        }

        errors
    }
}

/// Model-level defaults consulted when persisted args leave fields unset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InteractionDefaultsProfile {
    pub default_terminate_boundary: BoundaryReference,
    pub default_trim_boundary: BoundaryReference,
    pub default_opening_clearance_m: f64,
}

impl Default for InteractionDefaultsProfile {
    fn default() -> Self {
        Self {
            default_terminate_boundary: BoundaryReference::OuterFace,
            default_trim_boundary: BoundaryReference::OuterFace,
            default_opening_clearance_m: 0.0,
        }
    }
}

/// Returns a new args value with `action`'s defaults applied to unset
/// fields. The persisted input is cloned first and never mutated.
pub fn resolve_args(
    action: InteractionAction,
    persisted: Option<&InteractionEffectArgs>,
    profile: &InteractionDefaultsProfile,
) -> InteractionEffectArgs {
    let mut args = persisted.cloned().unwrap_or_default();

    match action {
        InteractionAction::Terminate => {
            args.boundary.get_or_insert(profile.default_terminate_boundary);
            args.offset_m.get_or_insert(0.0);
            args.clearance_m.get_or_insert(0.0);
        }
        InteractionAction::TrimToBoundary => {
            args.boundary.get_or_insert(profile.default_trim_boundary);
            args.offset_m.get_or_insert(0.0);
            args.clearance_m.get_or_insert(0.0);
        }
        InteractionAction::AddOpening => {
            args.clearance_m.get_or_insert(profile.default_opening_clearance_m);
            args.through_all.get_or_insert(true);
        }
        _ => {}
    }

    args
}
