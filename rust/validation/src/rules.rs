// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The validation rule engine.
//!
//! `validate` performs one read-only pass over the payload and returns every
//! violation found. Elements are checked independently; a violation in one
//! element never stops the scan. Inside a single element the deeper
//! geometry-kind and Z-source checks are skipped when the basics (surface
//! model type, Z-source, geometry) did not resolve, so one missing preset
//! does not cascade into a page of derivative errors.
//!
//! The unknown-value arms of the original wire contract are narrowed by the
//! type system here: an out-of-range Z-source or surface-model tag fails
//! JSON deserialization and never reaches the engine. The one in-range but
//! unsupported variant, `Link_to_external_model`, is still reported.

use rustc_hash::{FxHashMap, FxHashSet};

use lotmodel_contract::enums::{GeometryKind, SurfaceModelType, ZSourceSetting};
use lotmodel_contract::payload::{Element, Geometry, GeometryPoint, JobPayload, Preset};

use crate::resolve::resolve_effective;
use crate::violation::{Rule, Violation, ViolationScope};

/// Validates a job payload, returning all violations found.
///
/// An empty list means the payload is well-formed enough for the modeling
/// engine. This never fails for data errors and inspects nothing beyond the
/// payload itself.
pub fn validate(payload: &JobPayload) -> Vec<Violation> {
    let mut violations = Vec::new();

    let Some(model) = payload.model.as_ref() else {
        violations.push(Violation::new(
            ViolationScope::Model,
            Rule::ModelMissing,
            "Model is missing from the payload.",
        ));
        return violations;
    };

    let index = PayloadIndex::build(payload, &mut violations);

    check_mesh_values(
        ViolationScope::Model,
        "",
        model.mesh_resolution_in_m,
        model.max_extrapolation_distance_in_m,
        &mut violations,
    );

    for element in &payload.elements {
        validate_element(element, &index, &mut violations);
    }

    violations
}

/// Id-indexed lookups over the payload's reference collections.
struct PayloadIndex<'a> {
    presets: FxHashMap<i32, &'a Preset>,
    shape_ids: FxHashSet<i32>,
    style_ids: FxHashSet<i32>,
    geometries: FxHashMap<i32, &'a Geometry>,
}

impl<'a> PayloadIndex<'a> {
    /// Builds the lookup tables. Duplicate ids keep the first occurrence and
    /// are reported rather than silently shadowing it.
    fn build(payload: &'a JobPayload, violations: &mut Vec<Violation>) -> Self {
        let mut presets = FxHashMap::default();
        for preset in &payload.presets {
            let id = preset.spatial_element_preset_id;
            if presets.contains_key(&id) {
                violations.push(Violation::new(
                    ViolationScope::Preset(id),
                    Rule::DuplicatePresetId,
                    format!("SpatialElementPresetId {id} appears more than once in Presets."),
                ));
            } else {
                presets.insert(id, preset);
            }
        }

        let mut geometries = FxHashMap::default();
        for geometry in &payload.geometries {
            let id = geometry.geometry_id;
            if geometries.contains_key(&id) {
                violations.push(Violation::new(
                    ViolationScope::Model,
                    Rule::DuplicateGeometryId,
                    format!("GeometryId {id} appears more than once in Geometries."),
                ));
            } else {
                geometries.insert(id, geometry);
            }
        }

        let shape_ids = payload.shapes.iter().map(|s| s.spatial_shape_id).collect();
        let style_ids = payload.styles.iter().map(|s| s.spatial_model_style_id).collect();

        Self {
            presets,
            shape_ids,
            style_ids,
            geometries,
        }
    }
}

fn validate_element(element: &Element, index: &PayloadIndex<'_>, violations: &mut Vec<Violation>) {
    let scope = ViolationScope::Element(element.spatial_model_element_id);
    let (config, preset) = resolve_effective(element, &index.presets);

    // Geometry presence
    let geometry = match element.geometry_id {
        Some(id) => {
            let found = index.geometries.get(&id).copied();
            if found.is_none() {
                violations.push(Violation::new(
                    scope,
                    Rule::GeometryNotFound,
                    format!("GeometryId {id} missing from payload.Geometries."),
                ));
            }
            found
        }
        None => {
            violations.push(Violation::new(
                scope,
                Rule::GeometryIdMissing,
                "GeometryId is missing (geometry is required for spatial processing).",
            ));
            None
        }
    };

    // Must have SurfaceModelType + ZSourceSetting resolved
    if config.surface_model_type.is_none() {
        violations.push(Violation::new(
            scope,
            Rule::SurfaceModelTypeUnresolved,
            "SurfaceModelType not resolved (need preset or element override).",
        ));
    }
    if config.z_source.is_none() {
        violations.push(Violation::new(
            scope,
            Rule::ZSourceUnresolved,
            "ZSurfaceSetting not resolved (need preset or element override).",
        ));
    }

    // Shape/style references must exist when set
    if let Some(shape_id) = config.shape_id {
        if !index.shape_ids.contains(&shape_id) {
            violations.push(Violation::new(
                scope,
                Rule::ShapeNotFound,
                format!("SpatialShapeId {shape_id} not present in payload.Shapes."),
            ));
        }
    }
    if let Some(style_id) = config.style_id {
        if !index.style_ids.contains(&style_id) {
            violations.push(Violation::new(
                scope,
                Rule::StyleNotFound,
                format!("SpatialModelStyleId {style_id} not present in payload.Styles."),
            ));
        }
    }

    // Mesh overrides are validated independently per level, never merged.
    if let Some(mesh) = element.mesh_override.as_ref() {
        check_mesh_values(
            scope,
            "MeshOverride.",
            mesh.mesh_resolution_in_m,
            mesh.max_extrapolation_distance_in_m,
            violations,
        );
    }
    if let Some(preset) = preset {
        if let Some(mesh) = preset.preset_mesh_override.as_ref() {
            check_mesh_values(
                ViolationScope::Preset(preset.spatial_element_preset_id),
                "PresetMeshOverride.",
                mesh.mesh_resolution_in_m,
                mesh.max_extrapolation_distance_in_m,
                violations,
            );
        }
    }

    // Missing basics: stop here for this element to avoid cascades.
    let (Some(surface_model_type), Some(z_source), Some(geometry)) =
        (config.surface_model_type, config.z_source, geometry)
    else {
        return;
    };

    // Geometry kind ↔ surface-model-type compatibility
    if let Some(kind) = geometry.kind() {
        match kind {
            GeometryKind::LineString
                if surface_model_type != SurfaceModelType::ExtrudeShapeAlongPath =>
            {
                violations.push(Violation::new(
                    scope,
                    Rule::LineStringRequiresPathExtrusion,
                    format!(
                        "GeometryType LineString implies SurfaceModelType={}. Actual={surface_model_type}.",
                        SurfaceModelType::ExtrudeShapeAlongPath
                    ),
                ));
            }
            GeometryKind::Point
                if surface_model_type != SurfaceModelType::ExtrudeVerticalShapeFromPoint =>
            {
                violations.push(Violation::new(
                    scope,
                    Rule::PointRequiresVerticalExtrusion,
                    format!(
                        "GeometryType Point implies SurfaceModelType={}. Actual={surface_model_type}.",
                        SurfaceModelType::ExtrudeVerticalShapeFromPoint
                    ),
                ));
            }
            GeometryKind::Polygon
                if matches!(
                    surface_model_type,
                    SurfaceModelType::ExtrudeShapeAlongPath
                        | SurfaceModelType::ExtrudeVerticalShapeFromPoint
                ) =>
            {
                violations.push(Violation::new(
                    scope,
                    Rule::PolygonNotExtrudable,
                    format!(
                        "GeometryType Polygon is not valid for extrusion SurfaceModelType {surface_model_type}."
                    ),
                ));
            }
            _ => {}
        }
    }

    // Z-source rules
    match z_source {
        ZSourceSetting::FromGeometry => {
            if matches!(
                surface_model_type,
                SurfaceModelType::OneSurfaceTo3dMesh
                    | SurfaceModelType::OneSurfaceWithHeightTo3dSolid
                    | SurfaceModelType::TwoSurfacesTo3dSolid
            ) {
                violations.push(Violation::new(
                    scope,
                    Rule::FromGeometryRequiresExtrusion,
                    "ZSourceSetting=From_Geometry is only valid for extrusion SurfaceModelTypes.",
                ));
            }
            if !has_endpoint_z(geometry) {
                violations.push(Violation::new(
                    scope,
                    Rule::FromGeometryRequiresZ,
                    "ZSourceSetting=From_Geometry requires Z values on geometry.",
                ));
            }
        }
        ZSourceSetting::FromSurface => {
            // Base-surface requirements for the non-extrusion types live in
            // the per-type rules below, so each missing surface is reported
            // exactly once.
            if matches!(
                surface_model_type,
                SurfaceModelType::ExtrudeShapeAlongPath
                    | SurfaceModelType::ExtrudeVerticalShapeFromPoint
            ) && config.base_surface_id.is_none()
            {
                violations.push(Violation::new(
                    scope,
                    Rule::FromSurfaceRequiresBaseSurface,
                    format!(
                        "ZSourceSetting=From_Surface requires BaseSurfaceId for SurfaceModelType {surface_model_type}."
                    ),
                ));
            }
        }
        ZSourceSetting::UseFixedZ => {
            if config.base_surface_id.is_some() || config.top_surface_id.is_some() {
                violations.push(Violation::new(
                    scope,
                    Rule::FixedZForbidsSurfaces,
                    "ZSourceSetting=Use_Fixed_Z makes BaseSurfaceId/TopSurfaceId redundant (should be unset).",
                ));
            }
            // Offsets default to 0 and need no further checks.
        }
    }

    // Surface-model-type rules
    match surface_model_type {
        SurfaceModelType::OneSurfaceTo3dMesh => {
            if z_source != ZSourceSetting::FromSurface {
                violations.push(Violation::new(
                    scope,
                    Rule::RequiresFromSurface,
                    "One_Surface_To_3D_Mesh requires ZSourceSetting=From_Surface.",
                ));
            }
            if config.base_surface_id.is_none() {
                violations.push(Violation::new(
                    scope,
                    Rule::RequiresBaseSurface,
                    "One_Surface_To_3D_Mesh requires BaseSurfaceId.",
                ));
            }
        }
        SurfaceModelType::OneSurfaceWithHeightTo3dSolid => {
            if z_source != ZSourceSetting::FromSurface {
                violations.push(Violation::new(
                    scope,
                    Rule::RequiresFromSurface,
                    "One_Surface_With_Height_To_3DSolid requires ZSourceSetting=From_Surface.",
                ));
            }
            if config.base_surface_id.is_none() {
                violations.push(Violation::new(
                    scope,
                    Rule::RequiresBaseSurface,
                    "One_Surface_With_Height_To_3DSolid requires BaseSurfaceId.",
                ));
            }
            if !config.height_in_m.is_some_and(|h| h > 0.0) {
                violations.push(Violation::new(
                    scope,
                    Rule::RequiresHeight,
                    "One_Surface_With_Height_To_3DSolid requires HeightInM > 0 (element core or preset).",
                ));
            }
        }
        SurfaceModelType::TwoSurfacesTo3dSolid => {
            if config.base_surface_id.is_none() || config.top_surface_id.is_none() {
                violations.push(Violation::new(
                    scope,
                    Rule::RequiresBothSurfaces,
                    "Two_Surfaces_To_3DSolid requires both BaseSurfaceId and TopSurfaceId.",
                ));
            }
            // Height is redundant here; not a violation.
        }
        SurfaceModelType::ExtrudeShapeAlongPath => {
            if config.shape_id.is_none() {
                violations.push(Violation::new(
                    scope,
                    Rule::RequiresShape,
                    "Extrude_Shape_Along_Path requires SpatialShapeId (preset or override).",
                ));
            }
            if geometry.kind() != Some(GeometryKind::LineString) {
                violations.push(Violation::new(
                    scope,
                    Rule::RequiresLineStringGeometry,
                    "Extrude_Shape_Along_Path requires LineString geometry.",
                ));
            }
        }
        SurfaceModelType::ExtrudeVerticalShapeFromPoint => {
            if config.shape_id.is_none() {
                violations.push(Violation::new(
                    scope,
                    Rule::RequiresShape,
                    "Extrude_Vertical_Shape_From_Point requires SpatialShapeId (preset or override).",
                ));
            }
            if geometry.kind() != Some(GeometryKind::Point) {
                violations.push(Violation::new(
                    scope,
                    Rule::RequiresPointGeometry,
                    "Extrude_Vertical_Shape_From_Point requires Point geometry.",
                ));
            }
            if !config.height_in_m.is_some_and(|h| h > 0.0) {
                violations.push(Violation::new(
                    scope,
                    Rule::RequiresHeight,
                    "Extrude_Vertical_Shape_From_Point requires HeightInM > 0 (element core or preset).",
                ));
            }
        }
        SurfaceModelType::LinkToExternalModel => {
            violations.push(Violation::new(
                scope,
                Rule::UnsupportedSurfaceModelType,
                format!("Unknown or unsupported SurfaceModelType: {surface_model_type}."),
            ));
        }
    }
}

/// First and last points must both carry a valid (non-NaN) Z. Covers the
/// single-point case too.
fn has_endpoint_z(geometry: &Geometry) -> bool {
    let valid = |p: &GeometryPoint| p.z.is_some_and(|z| !z.is_nan());
    match (geometry.geometry.first(), geometry.geometry.last()) {
        (Some(first), Some(last)) => valid(first) && valid(last),
        _ => false,
    }
}

/// Mesh parameter sanity, shared by the model defaults and both override
/// levels.
fn check_mesh_values(
    scope: ViolationScope,
    prefix: &str,
    mesh_resolution_in_m: Option<f64>,
    max_extrapolation_distance_in_m: Option<f64>,
    violations: &mut Vec<Violation>,
) {
    if mesh_resolution_in_m.is_some_and(|v| v < 0.0) {
        violations.push(Violation::new(
            scope,
            Rule::MeshResolutionNegative,
            format!("{prefix}MeshResolutionInM must be >= 0."),
        ));
    }
    if max_extrapolation_distance_in_m.is_some_and(|v| v < 0.0) {
        violations.push(Violation::new(
            scope,
            Rule::MaxExtrapolationNegative,
            format!("{prefix}MaxExtrapolationDistanceInM must be >= 0."),
        ));
    }
}
