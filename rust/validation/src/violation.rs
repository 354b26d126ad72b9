// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structured violation records.
//!
//! One violation describes one broken rule, tagged with the payload scope it
//! was found in so callers can trace it back to an element or preset.
//! Violations are plain descriptions, never errors: the rule engine returns
//! them, it does not raise them.

use std::fmt;

/// Where in the payload a violation was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationScope {
    /// The payload root or its model defaults.
    Model,
    /// One element, by `spatial_model_element_id`.
    Element(i32),
    /// One preset, by `spatial_element_preset_id`.
    Preset(i32),
}

impl fmt::Display for ViolationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => f.write_str("Model"),
            Self::Element(id) => write!(f, "Element {id}"),
            Self::Preset(id) => write!(f, "Preset {id}"),
        }
    }
}

/// Which rule a violation broke. Stable identifiers for tests and callers
/// that dispatch on the kind of problem rather than the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    ModelMissing,
    DuplicatePresetId,
    DuplicateGeometryId,
    MeshResolutionNegative,
    MaxExtrapolationNegative,
    GeometryIdMissing,
    GeometryNotFound,
    SurfaceModelTypeUnresolved,
    ZSourceUnresolved,
    ShapeNotFound,
    StyleNotFound,
    LineStringRequiresPathExtrusion,
    PointRequiresVerticalExtrusion,
    PolygonNotExtrudable,
    FromGeometryRequiresExtrusion,
    FromGeometryRequiresZ,
    FromSurfaceRequiresBaseSurface,
    FixedZForbidsSurfaces,
    RequiresFromSurface,
    RequiresBaseSurface,
    RequiresBothSurfaces,
    RequiresHeight,
    RequiresShape,
    RequiresLineStringGeometry,
    RequiresPointGeometry,
    UnsupportedSurfaceModelType,
}

/// One reported inconsistency in a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub scope: ViolationScope,
    pub rule: Rule,
    pub message: String,
}

impl Violation {
    pub fn new(scope: ViolationScope, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            scope,
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.scope, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_scope() {
        let violation = Violation::new(
            ViolationScope::Element(12),
            Rule::GeometryIdMissing,
            "GeometryId is required.",
        );
        assert_eq!(violation.to_string(), "Element 12: GeometryId is required.");

        let model = Violation::new(ViolationScope::Model, Rule::ModelMissing, "Model is missing.");
        assert_eq!(model.to_string(), "Model: Model is missing.");
    }
}
