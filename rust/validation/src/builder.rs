// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Incremental construction of job payloads.
//!
//! The builder seeds a payload with empty collections, lets callers fill it
//! wholesale or append item by item, and validates everything once in
//! [`JobPayloadBuilder::build`]. Construction errors and rule violations are
//! aggregated into a single [`BuildError`] rather than failing on the first
//! problem.

use tracing::{debug, warn};
use uuid::Uuid;

use lotmodel_contract::payload::{
    CoordinateSystem, Element, Geometry, JobPayload, LotInfo, ModelDefaults, Preset, Shape, Style,
    WorkTypeInfo,
};

use crate::rules;

/// Finalization failed: required fields were missing or validation found
/// rule violations. Individual problems are joined into one message.
#[derive(Debug, thiserror::Error)]
#[error("job payload build failed: {}", .errors.join(" | "))]
pub struct BuildError {
    pub errors: Vec<String>,
}

/// Incremental builder for [`JobPayload`].
#[derive(Debug, Default)]
pub struct JobPayloadBuilder {
    payload: JobPayload,
    errors: Vec<String>,
}

impl JobPayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(
        mut self,
        schema_version: i32,
        contract_name: Option<&str>,
        schema_hash: Option<&str>,
    ) -> Self {
        self.payload.schema_version = schema_version;
        if let Some(name) = contract_name {
            if !name.trim().is_empty() {
                self.payload.contract_name = name.to_owned();
            }
        }
        if let Some(hash) = schema_hash {
            self.payload.schema_hash = hash.to_owned();
        }
        self
    }

    pub fn with_job(mut self, job_id: Uuid) -> Self {
        self.payload.job_id = job_id;
        self
    }

    pub fn with_project(mut self, project_id: i32, project_guid: Uuid) -> Self {
        self.payload.project_id = project_id;
        self.payload.project_guid = project_guid;
        self
    }

    pub fn with_spatial_model_id(mut self, spatial_model_id: i32) -> Self {
        self.payload.spatial_model_id = spatial_model_id;
        self
    }

    pub fn with_model(mut self, model: ModelDefaults) -> Self {
        self.payload.model = Some(model);
        self
    }

    // ------------------ Collections (replace) ------------------

    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.payload.elements = elements;
        self
    }

    pub fn with_geometries(mut self, geometries: Vec<Geometry>) -> Self {
        self.payload.geometries = geometries;
        self
    }

    pub fn with_coordinate_systems(mut self, coordinate_systems: Vec<CoordinateSystem>) -> Self {
        self.payload.coordinate_systems = coordinate_systems;
        self
    }

    pub fn with_lot_info(mut self, lots: Vec<LotInfo>) -> Self {
        self.payload.lot_info = lots;
        self
    }

    pub fn with_work_types(mut self, work_types: Vec<WorkTypeInfo>) -> Self {
        self.payload.work_types = work_types;
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.payload.presets = presets;
        self
    }

    pub fn with_shapes(mut self, shapes: Vec<Shape>) -> Self {
        self.payload.shapes = shapes;
        self
    }

    pub fn with_styles(mut self, styles: Vec<Style>) -> Self {
        self.payload.styles = styles;
        self
    }

    // ------------------ Collections (append) ------------------

    pub fn add_element(mut self, element: Element) -> Self {
        self.payload.elements.push(element);
        self
    }

    pub fn add_geometry(mut self, geometry: Geometry) -> Self {
        self.payload.geometries.push(geometry);
        self
    }

    pub fn add_coordinate_system(mut self, coordinate_system: CoordinateSystem) -> Self {
        self.payload.coordinate_systems.push(coordinate_system);
        self
    }

    pub fn add_lot_info(mut self, lot: LotInfo) -> Self {
        self.payload.lot_info.push(lot);
        self
    }

    pub fn add_work_type(mut self, work_type: WorkTypeInfo) -> Self {
        self.payload.work_types.push(work_type);
        self
    }

    pub fn add_preset(mut self, preset: Preset) -> Self {
        self.payload.presets.push(preset);
        self
    }

    pub fn add_shape(mut self, shape: Shape) -> Self {
        self.payload.shapes.push(shape);
        self
    }

    pub fn add_style(mut self, style: Style) -> Self {
        self.payload.styles.push(style);
        self
    }

    // ------------------ Finalization ------------------

    /// Records a build-time error without aborting construction. Callers can
    /// keep assembling and fail once at [`JobPayloadBuilder::build`].
    pub fn add_error(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.trim().is_empty() {
            self.errors.push(message);
        }
        self
    }

    /// Finalizes the payload: checks required identifiers, runs the rule
    /// engine, and returns the payload or one aggregated error.
    pub fn build(mut self) -> Result<JobPayload, BuildError> {
        if self.payload.job_id.is_nil() {
            self.errors.push("JobId is required.".to_owned());
        }
        if self.payload.project_id <= 0 {
            self.errors.push("ProjectId is required and must be > 0.".to_owned());
        }
        if self.payload.project_guid.is_nil() {
            self.errors.push("ProjectGuid is required.".to_owned());
        }
        if self.payload.spatial_model_id <= 0 {
            self.errors.push("SpatialModelId is required and must be > 0.".to_owned());
        }

        let violations = rules::validate(&self.payload);
        debug!(
            job_id = %self.payload.job_id,
            elements = self.payload.elements.len(),
            violations = violations.len(),
            "job payload validated"
        );
        self.errors.extend(violations.iter().map(ToString::to_string));

        if !self.errors.is_empty() {
            warn!(errors = self.errors.len(), "job payload build failed");
            return Err(BuildError {
                errors: self.errors,
            });
        }

        Ok(self.payload)
    }
}
