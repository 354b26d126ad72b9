// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire-format compatibility checks against the established JSON contract.

use serde_json::json;
use uuid::Uuid;

use lotmodel_contract::enums::{EffectTarget, InteractionAction, SurfaceModelType, ZSourceSetting};
use lotmodel_contract::interaction::{InteractionDefaultsProfile, InteractionEffect};
use lotmodel_contract::payload::{JobPayload, ModelDefaults};
use lotmodel_contract::{schema_hash, CONTRACT_NAME};

#[test]
fn payload_serializes_with_established_member_names() {
    let mut payload = JobPayload {
        job_id: Uuid::new_v4(),
        project_id: 3,
        project_guid: Uuid::new_v4(),
        spatial_model_id: 5,
        ..JobPayload::default()
    };
    payload.model = Some(ModelDefaults {
        coordinate_system_id: 1,
        srid: 7855,
        polyline_buffer_radius_m: Some(0.25),
        ..ModelDefaults::default()
    });

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["ContractName"], CONTRACT_NAME);
    assert_eq!(value["SchemaHash"], schema_hash());
    assert!(value.get("LstLotInfo").is_some());
    assert!(value.get("LstWorkTypes").is_some());
    assert_eq!(value["Model"]["PolyLineBufferRadiusM"], 0.25);
    // Unset optionals never appear.
    assert!(value["Model"].get("MeshResolutionInM").is_none());
}

#[test]
fn enum_wire_names_match_the_established_contract() {
    let smt = serde_json::to_value(SurfaceModelType::OneSurfaceTo3dMesh).unwrap();
    assert_eq!(smt, json!("One_Surface_To_3D_Mesh"));
    let z = serde_json::to_value(ZSourceSetting::FromGeometry).unwrap();
    assert_eq!(z, json!("From_Geometry"));

    let parsed: SurfaceModelType =
        serde_json::from_value(json!("Extrude_Vertical_Shape_From_Point")).unwrap();
    assert_eq!(parsed, SurfaceModelType::ExtrudeVerticalShapeFromPoint);

    // Out-of-contract tags are rejected at the deserialization boundary.
    assert!(serde_json::from_value::<ZSourceSetting>(json!("From_Nowhere")).is_err());
}

#[test]
fn effect_without_args_deserializes_and_resolves_defaults() {
    let raw = json!({
        "EffectId": "6f1f3c82-9a7e-4f5e-8f62-0d4f4a5f9b10",
        "OrderId": 1,
        "Target": "Lower",
        "Action": "AddOpening"
    });

    let effect: InteractionEffect = serde_json::from_value(raw).unwrap();
    assert_eq!(effect.target, EffectTarget::Lower);
    assert_eq!(effect.action, InteractionAction::AddOpening);
    assert!(effect.args.is_none());

    let profile = InteractionDefaultsProfile::default();
    let args = effect.effective_args(&profile);
    assert_eq!(args.clearance_m, Some(profile.default_opening_clearance_m));
    assert_eq!(args.through_all, Some(true));
}

#[test]
fn effect_round_trip_preserves_persisted_args() {
    let mut effect = InteractionEffect::new(2, EffectTarget::Higher, InteractionAction::StepOver);
    effect.args = Some(lotmodel_contract::InteractionEffectArgs {
        step_delta_m: Some(0.45),
        min_cover_m: Some(0.6),
        ..Default::default()
    });

    let text = serde_json::to_string(&effect).unwrap();
    assert!(text.contains("\"StepDeltaM\":0.45"));
    // Unused knobs stay off the wire.
    assert!(!text.contains("ClearanceM"));

    let back: InteractionEffect = serde_json::from_str(&text).unwrap();
    assert_eq!(back.args, effect.args);
    assert_eq!(back.effect_id, effect.effect_id);
}
