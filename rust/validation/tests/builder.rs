// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builder construction-boundary checks.

use uuid::Uuid;

use lotmodel_contract::enums::{SurfaceModelType, ZSourceSetting};
use lotmodel_contract::payload::{
    Element, Geometry, GeometryPoint, ModelDefaults, Preset,
};
use lotmodel_contract::{schema_hash, CONTRACT_NAME, SCHEMA_VERSION};
use lotmodel_validation::JobPayloadBuilder;

fn two_surface_preset(id: i32) -> Preset {
    Preset {
        spatial_element_preset_id: id,
        unique_id: None,
        preset_name: Some("fill".to_owned()),
        spatial_model_style_id: None,
        spatial_shape_id: None,
        surface_model_type: SurfaceModelType::TwoSurfacesTo3dSolid,
        z_surface_setting: ZSourceSetting::FromSurface,
        trim_priority: 0,
        interaction_effects: None,
        anchor_mode: None,
        anchor_x_offset_m: 0.0,
        anchor_y_offset_m: 0.0,
        rotation: 0,
        base_surface_id: Some(Uuid::new_v4()),
        top_surface_id: Some(Uuid::new_v4()),
        base_offset_in_m: None,
        top_offset_in_m: None,
        height_in_m: None,
        preset_mesh_override: None,
    }
}

fn polygon_geometry(id: i32) -> Geometry {
    Geometry {
        geometry_id: id,
        lot_id: 1,
        coordinate_system_id: 1,
        unique_id: Uuid::new_v4(),
        geometry_type: "Polygon".to_owned(),
        geometry: vec![
            GeometryPoint { x: 0.0, y: 0.0, z: None },
            GeometryPoint { x: 10.0, y: 0.0, z: None },
            GeometryPoint { x: 10.0, y: 10.0, z: None },
            GeometryPoint { x: 0.0, y: 0.0, z: None },
        ],
    }
}

fn element(id: i32, geometry_id: i32, preset_id: i32) -> Element {
    Element {
        spatial_model_element_id: id,
        lot_id: 1,
        geometry_id: Some(geometry_id),
        spatial_element_preset_id: Some(preset_id),
        ..Element::default()
    }
}

#[test]
fn builds_a_complete_valid_payload() {
    let job_id = Uuid::new_v4();
    let project_guid = Uuid::new_v4();

    let payload = JobPayloadBuilder::new()
        .with_job(job_id)
        .with_project(42, project_guid)
        .with_spatial_model_id(7)
        .with_model(ModelDefaults {
            coordinate_system_id: 1,
            srid: 7855,
            ..ModelDefaults::default()
        })
        .add_preset(two_surface_preset(1))
        .add_geometry(polygon_geometry(100))
        .add_element(element(1, 100, 1))
        .build()
        .expect("payload should build");

    assert_eq!(payload.job_id, job_id);
    assert_eq!(payload.project_id, 42);
    assert_eq!(payload.spatial_model_id, 7);
    assert_eq!(payload.schema_version, SCHEMA_VERSION);
    assert_eq!(payload.contract_name, CONTRACT_NAME);
    assert_eq!(payload.schema_hash, schema_hash());
    assert_eq!(payload.elements.len(), 1);
}

#[test]
fn missing_identifiers_are_aggregated_into_one_error() {
    let err = JobPayloadBuilder::new()
        .with_model(ModelDefaults::default())
        .build()
        .unwrap_err();

    assert_eq!(
        err.errors,
        vec![
            "JobId is required.".to_owned(),
            "ProjectId is required and must be > 0.".to_owned(),
            "ProjectGuid is required.".to_owned(),
            "SpatialModelId is required and must be > 0.".to_owned(),
        ]
    );

    let text = err.to_string();
    assert!(text.starts_with("job payload build failed: "));
    assert!(text.contains("JobId is required. | ProjectId is required and must be > 0."));
}

#[test]
fn rule_violations_fail_the_build() {
    let err = JobPayloadBuilder::new()
        .with_job(Uuid::new_v4())
        .with_project(1, Uuid::new_v4())
        .with_spatial_model_id(1)
        // No model defaults at all.
        .build()
        .unwrap_err();

    assert_eq!(err.errors, vec!["Model: Model is missing from the payload.".to_owned()]);
}

#[test]
fn caller_supplied_errors_are_carried_through() {
    let err = JobPayloadBuilder::new()
        .with_job(Uuid::new_v4())
        .with_project(1, Uuid::new_v4())
        .with_spatial_model_id(1)
        .with_model(ModelDefaults::default())
        .add_error("Surface 0d1f not found upstream.")
        .add_error("   ") // blank, dropped
        .build()
        .unwrap_err();

    assert_eq!(err.errors, vec!["Surface 0d1f not found upstream.".to_owned()]);
}

#[test]
fn with_schema_ignores_blank_contract_name() {
    let payload = JobPayloadBuilder::new()
        .with_schema(2, Some("  "), Some("deadbeef"))
        .with_job(Uuid::new_v4())
        .with_project(1, Uuid::new_v4())
        .with_spatial_model_id(1)
        .with_model(ModelDefaults::default())
        .build()
        .expect("payload should build");

    assert_eq!(payload.schema_version, 2);
    assert_eq!(payload.contract_name, CONTRACT_NAME);
    assert_eq!(payload.schema_hash, "deadbeef");
}
