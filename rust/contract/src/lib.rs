// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Lotmodel Contract
//!
//! Data contract for spatial-model job payloads: the persisted shapes that
//! describe how a set of 2D/3D lots (parcels) should be turned into 3D
//! geometry by a downstream spatial-modeling engine.
//!
//! The contract is plain data. All cross-field consistency rules live in
//! `lotmodel-validation`; the only behavior carried here is the cascading
//! defaults resolver for interaction-effect parameters and the unit-aware
//! display helpers for those parameters.
//!
//! Payload types round-trip through JSON with PascalCase member names, which
//! is the persisted wire shape shared with non-Rust consumers. Optional
//! fields are omitted when unset; absence means "apply defaults", not zero.

pub mod display;
pub mod dtos;
pub mod enums;
pub mod interaction;
pub mod payload;
pub mod schema;

pub use display::{describe_fields, format_length, ArgFieldDescriptor, ArgFieldType, UnitPreferences};
pub use enums::{
    AnchorMode, BoundaryReference, EffectTarget, ExtrapolationMode, ExtrusionZMode, GeometryKind,
    InteractionAction, LengthUnit, MeshResolutionStrategy, ProfileKind, ShapeType,
    SurfaceModelType, SurfaceStatus, ZSourceSetting,
};
pub use interaction::{
    resolve_args, InteractionDefaultsProfile, InteractionEffect, InteractionEffectArgs,
};
pub use payload::{
    AdditionalProperty, CoordinateSystem, Element, ElementOverride, Geometry, GeometryPoint,
    JobPayload, LotInfo, MeshOverride, ModelDefaults, Preset, PresetMeshOverride, Shape, Style,
    WorkTypeInfo,
};
pub use schema::{schema_hash, CONTRACT_NAME, SCHEMA_VERSION};
