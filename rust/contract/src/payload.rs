// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The job payload aggregates.
//!
//! One [`JobPayload`] describes a complete spatial-model job: the model-wide
//! defaults, every placed element, the lot geometries they reference, and
//! the preset/shape/style reference collections the elements dereference by
//! id. The graph is built once per job submission, validated once, and
//! treated as immutable afterwards.
//!
//! Ids are local to one payload; only fields typed [`Uuid`] are stable
//! across payloads. Member names on the wire are PascalCase.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{
    AnchorMode, ExtrapolationMode, GeometryKind, MeshResolutionStrategy, ProfileKind, ShapeType,
    SurfaceModelType, ZSourceSetting,
};
use crate::interaction::InteractionEffect;
use crate::schema::{schema_hash, CONTRACT_NAME, SCHEMA_VERSION};

/// Root of the job payload graph.
///
/// Every collection is present (possibly empty); a payload with a missing
/// collection cannot be represented and so cannot be submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobPayload {
    pub schema_version: i32,
    pub contract_name: String,
    pub schema_hash: String,
    pub job_id: Uuid,

    pub project_id: i32,
    pub project_guid: Uuid,
    pub spatial_model_id: i32,

    /// Model-wide defaults. Optional in the serialized form; validation
    /// rejects payloads where it is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelDefaults>,

    pub elements: Vec<Element>,
    pub geometries: Vec<Geometry>,
    pub coordinate_systems: Vec<CoordinateSystem>,

    #[serde(rename = "LstLotInfo")]
    pub lot_info: Vec<LotInfo>,
    #[serde(rename = "LstWorkTypes")]
    pub work_types: Vec<WorkTypeInfo>,

    pub presets: Vec<Preset>,
    pub shapes: Vec<Shape>,
    pub styles: Vec<Style>,
}

impl Default for JobPayload {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            contract_name: CONTRACT_NAME.to_owned(),
            schema_hash: schema_hash(),
            job_id: Uuid::nil(),
            project_id: 0,
            project_guid: Uuid::nil(),
            spatial_model_id: 0,
            model: None,
            elements: Vec::new(),
            geometries: Vec::new(),
            coordinate_systems: Vec::new(),
            lot_info: Vec::new(),
            work_types: Vec::new(),
            presets: Vec::new(),
            shapes: Vec::new(),
            styles: Vec::new(),
        }
    }
}

/// Model-wide defaults for meshing and buffering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelDefaults {
    pub coordinate_system_id: i32,
    pub srid: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_resolution_in_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_resolution_strategy: Option<MeshResolutionStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_extrapolation_distance_in_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extrapolation_mode: Option<ExtrapolationMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_buffer_radius_m: Option<f64>,
    #[serde(rename = "PolyLineBufferRadiusM", skip_serializing_if = "Option::is_none")]
    pub polyline_buffer_radius_m: Option<f64>,
}

/// One placed spatial object to be modeled.
///
/// `height_in_m` and `rotation` are the element's core values; a core value
/// always wins over the corresponding preset value during resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Element {
    pub spatial_model_element_id: i32,

    pub lot_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spatial_element_preset_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_in_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_override: Option<ElementOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_override: Option<MeshOverride>,
}

/// Per-element replacement of preset fields. Any set field shadows the
/// preset during resolution; unset fields fall through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spatial_model_style_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spatial_shape_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction_effects: Option<Vec<InteractionEffect>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_model_type: Option<SurfaceModelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_surface_setting: Option<ZSourceSetting>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_mode: Option<AnchorMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_x_offset_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_y_offset_m: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_surface_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_surface_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_offset_in_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_offset_in_m: Option<f64>,
}

/// Element-scoped mesh parameter override. Validated independently; never
/// merged with the preset or model level inside this contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MeshOverride {
    pub spatial_model_element_id: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_resolution_in_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extrapolation_mode: Option<ExtrapolationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_extrapolation_distance_in_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_resolution_strategy: Option<MeshResolutionStrategy>,
}

/// Named reusable configuration bundle for elements.
///
/// Presets are looked up by `spatial_element_preset_id`; ids must be unique
/// within one payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Preset {
    pub spatial_element_preset_id: i32,

    /// Stable identity for diagnostics and id remapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spatial_model_style_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spatial_shape_id: Option<i32>,

    pub surface_model_type: SurfaceModelType,
    pub z_surface_setting: ZSourceSetting,

    pub trim_priority: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction_effects: Option<Vec<InteractionEffect>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_mode: Option<AnchorMode>,
    pub anchor_x_offset_m: f64,
    pub anchor_y_offset_m: f64,
    pub rotation: i32,

    /// Surface GUIDs only; the spatial service resolves surface content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_surface_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_surface_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_offset_in_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_offset_in_m: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_in_m: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_mesh_override: Option<PresetMeshOverride>,
}

/// Preset-scoped mesh parameter override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PresetMeshOverride {
    pub spatial_element_preset_id: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_resolution_in_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extrapolation_mode: Option<ExtrapolationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_extrapolation_distance_in_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_resolution_strategy: Option<MeshResolutionStrategy>,
}

/// An ordered sequence of 2D/3D lot points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Geometry {
    pub geometry_id: i32,
    pub lot_id: i32,
    pub coordinate_system_id: i32,
    pub unique_id: Uuid,

    /// "Point" | "LineString" | "Polygon". The tag is authoritative.
    pub geometry_type: String,

    pub geometry: Vec<GeometryPoint>,
}

impl Geometry {
    /// Parses the authoritative kind tag. `None` for unrecognized tags.
    pub fn kind(&self) -> Option<GeometryKind> {
        GeometryKind::parse(&self.geometry_type)
    }
}

/// One 2D/3D point. A missing `Z` means the point carries no elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeometryPoint {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

/// Extrusion profile referenced by elements and presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shape {
    pub spatial_shape_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<Uuid>,
    pub shape_name: String,

    pub shape_type: ShapeType,
    pub profile_kind: ProfileKind,

    // Circle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_diameter_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall_thickness_m: Option<f64>,

    // Rectangle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect_width_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect_height_m: Option<f64>,

    /// Polygon profile, outer ring only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_json: Option<serde_json::Value>,

    pub anchor_mode: AnchorMode,
}

/// Pure rendering metadata; consumed by reference only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Style {
    pub spatial_model_style_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<Uuid>,
    pub style_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_color_argb: Option<i32>,
    /// 0..1 where 1 is fully transparent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_transparency: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve_color_argb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve_width_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve_line_pattern: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve_dash_length_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve_gap_length_m: Option<f64>,
}

/// A coordinate system embedded in the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoordinateSystem {
    pub coordinate_system_id: i32,
    pub srid: i32,
    pub wkt: String,
}

/// Auxiliary lot reference data. Not involved in validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LotInfo {
    pub lot_unique_id: Uuid,
    pub lot_id: i64,
    pub lot_number: String,
    pub work_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_open: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_conformed: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_work_started: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_work_completed: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "NCRs", skip_serializing_if = "Option::is_none")]
    pub ncrs: Option<String>,
    #[serde(rename = "LstAdditionalProperties")]
    pub additional_properties: Vec<AdditionalProperty>,
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Auxiliary work-type reference data. Not involved in validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkTypeInfo {
    pub work_type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_type_description: Option<String>,
}

/// Free-form key/value attached to a lot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdditionalProperty {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_defaults_carry_schema_identity() {
        let payload = JobPayload::default();
        assert_eq!(payload.schema_version, SCHEMA_VERSION);
        assert_eq!(payload.contract_name, CONTRACT_NAME);
        assert_eq!(payload.schema_hash, schema_hash());
        assert!(payload.elements.is_empty());
    }

    #[test]
    fn geometry_kind_uses_the_tag() {
        let geometry = Geometry {
            geometry_id: 1,
            lot_id: 1,
            coordinate_system_id: 1,
            unique_id: Uuid::nil(),
            geometry_type: "lineString".to_owned(),
            // A single point, but the tag wins.
            geometry: vec![GeometryPoint { x: 0.0, y: 0.0, z: None }],
        };
        assert_eq!(geometry.kind(), Some(GeometryKind::LineString));
    }

    #[test]
    fn unset_optionals_are_omitted_from_json() {
        let element = Element {
            spatial_model_element_id: 7,
            lot_id: 3,
            ..Element::default()
        };
        let json = serde_json::to_string(&element).unwrap();
        assert!(json.contains("\"SpatialModelElementId\":7"));
        assert!(!json.contains("HeightInM"));
        assert!(!json.contains("ElementOverride"));
    }
}
