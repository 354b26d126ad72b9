// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CRUD shapes for surfaces, coordinate systems, clients and IFC models.
//!
//! Surface and client endpoints speak snake_case; coordinate-system, IFC and
//! LandXML endpoints speak PascalCase. Coordinate systems are GUID-based
//! throughout; SRIDs appear only as optional references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::SurfaceStatus;

/// Rejected request parameters at the DTO boundary.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be > 0 (got {value})")]
    NonPositive { field: &'static str, value: i32 },
}

// ============================================================
// Surfaces
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSurfaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub client_project_guid: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SurfaceStatus>,

    pub source_coordinate_system_id: Uuid,
    pub stored_coordinate_system_id: Uuid,

    pub tile_size_m: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_y: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSurfaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SurfaceStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_hash: Option<String>,

    #[serde(rename = "source_ClientCoordinateGuid")]
    pub source_client_coordinate_guid: Uuid,
    #[serde(rename = "stored_ClientCoordinateGuid")]
    pub stored_client_coordinate_guid: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_size_m: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_y: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_y: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceSummary {
    pub surface_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "sourceUri", skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,

    pub status: SurfaceStatus,

    pub source_coordinate_system_id: Uuid,
    pub stored_coordinate_system_id: Uuid,

    pub tile_size_m: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triangle_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced_on: Option<DateTime<Utc>>,

    #[serde(rename = "ProjectGuid")]
    pub project_guid: Uuid,
}

// ============================================================
// Coordinate systems
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoordinateSystemDto {
    pub coordinate_system_id: Uuid,
    pub project_guid: Uuid,
    /// Payload-side identifier this system was created from.
    pub source_guid: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srid: Option<i32>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub sr_wkt: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCoordinateSystemRequest {
    pub project_guid: Uuid,
    pub source_guid: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srid: Option<i32>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub sr_wkt: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCoordinateSystemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srid: Option<i32>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub sr_wkt: String,
}

// ============================================================
// Clients
// ============================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from_utc: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_rpm: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heavy_rate_limit_rpm: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClientRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from_utc: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_rpm: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heavy_rate_limit_rpm: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ============================================================
// IFC models
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IfcModelDto {
    pub model_id: i64,
    pub model_guid: Uuid,

    pub client_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_guid: Option<Uuid>,

    pub model_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_description: Option<String>,
    pub ifc_global_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename_on_server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_last_accessed: Option<DateTime<Utc>>,

    pub date_uploaded: DateTime<Utc>,
    pub created_utc: DateTime<Utc>,
    pub modified_utc: DateTime<Utc>,
    pub coordinate_system_id: Uuid,
}

/// A lat/lng envelope vertex on an IFC model object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoordinateDto {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IfcModelObjectDto {
    pub model_object_id: i64,
    /// Object guid within this service.
    pub model_guid: Uuid,
    /// IFC object GlobalId.
    pub model_uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ifc_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    pub is_assignable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope_geography: Option<Vec<CoordinateDto>>,

    pub created_utc: DateTime<Utc>,
    pub modified_utc: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsertModelFromIfcRequest {
    /// `None` creates; `Some` updates/overwrites.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_guid: Option<Uuid>,

    pub client_id: Uuid,
    pub project_guid: Uuid,

    pub model_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_description: Option<String>,

    /// Blob filename; the blob path is `{client_id}/{file_name}`.
    pub file_name: String,
    pub source_client_coordinate_guid: Uuid,
    pub stored_client_coordinate_guid: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsertModelFromIfcResult {
    pub model: IfcModelDto,
    pub inserted_objects: i32,
    pub deleted_objects: i32,
}

// ============================================================
// LandXML surface imports
// ============================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImportLandXmlAsSurfaceRequest {
    pub project_guid: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_id: Option<Uuid>,

    pub srid_source: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wkt_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srid_target: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wkt_target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_size_meters: Option<f64>,
    #[serde(rename = "SnapMetersXY", skip_serializing_if = "Option::is_none")]
    pub snap_meters_xy: Option<f64>,
}

impl ImportLandXmlAsSurfaceRequest {
    /// Parameter sanity check before the request leaves the process.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.project_guid.is_nil() {
            return Err(RequestError::MissingField("ProjectGuid"));
        }
        if self.srid_source <= 0 {
            return Err(RequestError::NonPositive {
                field: "SridSource",
                value: self.srid_source,
            });
        }
        if let Some(target) = self.srid_target {
            if target <= 0 {
                return Err(RequestError::NonPositive {
                    field: "SridTarget",
                    value: target,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImportLandXmlBodyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_id: Option<Uuid>,

    pub client_project_guid: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub source_client_coordinate_guid: Uuid,
    pub stored_client_coordinate_guid: Uuid,

    pub tile_size_meters: f64,

    #[serde(rename = "SnapMetersXY", skip_serializing_if = "Option::is_none")]
    pub snap_meters_xy: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landxml_import_request_checks_srids() {
        let mut request = ImportLandXmlAsSurfaceRequest {
            project_guid: Uuid::new_v4(),
            srid_source: 7855,
            ..ImportLandXmlAsSurfaceRequest::default()
        };
        assert!(request.validate().is_ok());

        request.srid_target = Some(0);
        assert!(matches!(
            request.validate(),
            Err(RequestError::NonPositive { field: "SridTarget", .. })
        ));

        request.project_guid = Uuid::nil();
        assert!(matches!(
            request.validate(),
            Err(RequestError::MissingField("ProjectGuid"))
        ));
    }

    #[test]
    fn surface_requests_use_snake_case_wire_names() {
        let request = CreateSurfaceRequest {
            surface_id: None,
            name: Some("design".to_owned()),
            client_project_guid: Uuid::new_v4(),
            source_type: None,
            source_uri: None,
            import_hash: None,
            status: Some(SurfaceStatus::Ready),
            source_coordinate_system_id: Uuid::new_v4(),
            stored_coordinate_system_id: Uuid::new_v4(),
            tile_size_m: 25.0,
            origin_x: None,
            origin_y: None,
            imported_on: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"client_project_guid\""));
        assert!(json.contains("\"tile_size_m\":25.0"));
        assert!(!json.contains("SurfaceId"));
    }
}
