// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request/response shapes for the upstream spatial API.
//!
//! These are boundary types only: plain serde shapes matching the remote
//! endpoints, with no behavior beyond small per-request sanity checks. Wire
//! casing follows each endpoint as observed (some endpoints use snake_case,
//! the rest PascalCase).

pub mod auth;
pub mod spatial;

pub use auth::{CreateSecretResponse, SpatialApiConnectionInfo, UpdateAuthInfoRequest};
pub use spatial::{
    CoordinateDto, CoordinateSystemDto, CreateClientRequest, CreateCoordinateSystemRequest,
    CreateSurfaceRequest, IfcModelDto, IfcModelObjectDto, ImportLandXmlAsSurfaceRequest,
    ImportLandXmlBodyRequest, SurfaceSummary, UpdateClientRequest,
    UpdateCoordinateSystemRequest, UpdateSurfaceRequest, UpsertModelFromIfcRequest,
    UpsertModelFromIfcResult,
};
