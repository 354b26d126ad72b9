// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enumerations shared across the job payload contract.
//!
//! Wire names are frozen: several enums keep their historical underscored
//! spellings on the wire (`One_Surface_To_3D_Mesh`, `From_Geometry`, ...)
//! so that existing persisted payloads keep deserializing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The method used to turn geometry plus surfaces into 3D form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceModelType {
    #[serde(rename = "One_Surface_To_3D_Mesh")]
    OneSurfaceTo3dMesh,
    #[serde(rename = "One_Surface_With_Height_To_3DSolid")]
    OneSurfaceWithHeightTo3dSolid,
    #[serde(rename = "Two_Surfaces_To_3DSolid")]
    TwoSurfacesTo3dSolid,
    #[serde(rename = "Extrude_Shape_Along_Path")]
    ExtrudeShapeAlongPath,
    #[serde(rename = "Extrude_Vertical_Shape_From_Point")]
    ExtrudeVerticalShapeFromPoint,
    /// Geometry comes from an externally linked model. Accepted on the wire
    /// but not supported by the modeling pipeline.
    #[serde(rename = "Link_to_external_model")]
    LinkToExternalModel,
}

impl fmt::Display for SurfaceModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OneSurfaceTo3dMesh => "One_Surface_To_3D_Mesh",
            Self::OneSurfaceWithHeightTo3dSolid => "One_Surface_With_Height_To_3DSolid",
            Self::TwoSurfacesTo3dSolid => "Two_Surfaces_To_3DSolid",
            Self::ExtrudeShapeAlongPath => "Extrude_Shape_Along_Path",
            Self::ExtrudeVerticalShapeFromPoint => "Extrude_Vertical_Shape_From_Point",
            Self::LinkToExternalModel => "Link_to_external_model",
        };
        f.write_str(name)
    }
}

/// Where elevation data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZSourceSetting {
    #[serde(rename = "From_Geometry")]
    FromGeometry,
    #[serde(rename = "From_Surface")]
    FromSurface,
    #[serde(rename = "Use_Fixed_Z")]
    UseFixedZ,
}

impl fmt::Display for ZSourceSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FromGeometry => "From_Geometry",
            Self::FromSurface => "From_Surface",
            Self::UseFixedZ => "Use_Fixed_Z",
        };
        f.write_str(name)
    }
}

/// Authoritative geometry kind carried by the geometry payload tag.
///
/// The payload stores the raw tag string; [`GeometryKind::parse`] matches it
/// case-insensitively. The engine trusts the tag rather than inferring the
/// kind from the point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
}

impl GeometryKind {
    /// Parses a geometry tag string; returns `None` for unrecognized tags.
    pub fn parse(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("Point") {
            Some(Self::Point)
        } else if tag.eq_ignore_ascii_case("LineString") {
            Some(Self::LineString)
        } else if tag.eq_ignore_ascii_case("Polygon") {
            Some(Self::Polygon)
        } else {
            None
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
        };
        f.write_str(name)
    }
}

/// How mesh resolution is chosen when a surface is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshResolutionStrategy {
    Fixed,
    Adaptive,
}

/// How surface samples outside the covered area are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtrapolationMode {
    NearestNeighbour,
    Planar,
    Clamp,
}

/// How Z values are assigned along an extruded path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtrusionZMode {
    EndpointsOnly,
    EachVertex,
    FollowSurface,
}

/// Anchor flags for shape placement. Stored as a bit set on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnchorMode(pub u8);

impl AnchorMode {
    pub const CENTER: AnchorMode = AnchorMode(1);
    pub const BOTTOM: AnchorMode = AnchorMode(2);
    pub const TOP: AnchorMode = AnchorMode(4);
    pub const LEFT: AnchorMode = AnchorMode(8);
    pub const RIGHT: AnchorMode = AnchorMode(16);

    pub fn contains(self, other: AnchorMode) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn union(self, other: AnchorMode) -> AnchorMode {
        AnchorMode(self.0 | other.0)
    }
}

/// Extrusion profile kind of a spatial shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Circle,
    Rectangle,
    Polygon,
}

/// Solid or hollow profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileKind {
    Solid,
    Hollow,
}

/// Which boundary of the other element an interaction references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryReference {
    Default,
    OuterFace,
    InnerFace,
    Centerline,
    HostBoundary,
}

/// Who an interaction effect is applied against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectTarget {
    Higher,
    Lower,
    Host,
    Tool,
    Auxiliary,
}

/// What an interaction effect does at a shared boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionAction {
    None,
    Terminate,
    TrimToBoundary,
    SubtractVolume,
    AddOpening,
    OffsetAround,
    StepOver,
    Split,
    Merge,
    ClearanceOnly,
    ClearanceEnvelope,
    Ignore,
}

/// Import lifecycle of an upstream surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceStatus {
    Importing,
    Ready,
    Replacing,
    Failed,
}

/// Display unit for lengths; payload values are always metres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Metre,
    Millimetre,
    Foot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_kind_parse_is_case_insensitive() {
        assert_eq!(GeometryKind::parse("Point"), Some(GeometryKind::Point));
        assert_eq!(GeometryKind::parse("linestring"), Some(GeometryKind::LineString));
        assert_eq!(GeometryKind::parse("POLYGON"), Some(GeometryKind::Polygon));
        assert_eq!(GeometryKind::parse("MultiPoint"), None);
        assert_eq!(GeometryKind::parse(""), None);
    }

    #[test]
    fn surface_model_type_wire_names_round_trip() {
        let json = serde_json::to_string(&SurfaceModelType::OneSurfaceTo3dMesh).unwrap();
        assert_eq!(json, "\"One_Surface_To_3D_Mesh\"");
        let back: SurfaceModelType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SurfaceModelType::OneSurfaceTo3dMesh);

        let z: ZSourceSetting = serde_json::from_str("\"Use_Fixed_Z\"").unwrap();
        assert_eq!(z, ZSourceSetting::UseFixedZ);
    }

    #[test]
    fn anchor_mode_flags_combine() {
        let anchored = AnchorMode::BOTTOM.union(AnchorMode::LEFT);
        assert!(anchored.contains(AnchorMode::BOTTOM));
        assert!(anchored.contains(AnchorMode::LEFT));
        assert!(!anchored.contains(AnchorMode::TOP));
    }
}
