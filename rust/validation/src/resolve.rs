// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Override resolution: element override → preset → unresolved.
//!
//! Resolution is centralized here so precedence can be tested independently
//! of the validation rules. The element's graph is never mutated; resolution
//! produces a fresh [`EffectiveConfig`] per call.

use rustc_hash::FxHashMap;

use lotmodel_contract::enums::{SurfaceModelType, ZSourceSetting};
use lotmodel_contract::payload::{Element, Preset};
use uuid::Uuid;

/// The effective per-element configuration after the cascade.
///
/// A `None` field means neither the element override nor a resolved preset
/// supplied a value; whether that is acceptable is the rule engine's call.
/// Offsets always resolve (both layers absent defaults to 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveConfig {
    pub surface_model_type: Option<SurfaceModelType>,
    pub z_source: Option<ZSourceSetting>,
    pub shape_id: Option<i32>,
    pub style_id: Option<i32>,
    pub base_surface_id: Option<Uuid>,
    pub top_surface_id: Option<Uuid>,
    pub base_offset_in_m: f64,
    pub top_offset_in_m: f64,
    pub height_in_m: Option<f64>,
}

/// Resolves the element's effective configuration against the preset index.
///
/// An element whose preset id does not resolve is treated identically to an
/// element with no preset: all preset-sourced fields fall through to `None`.
/// The resolved preset (if any) is returned alongside so callers can check
/// preset-scoped concerns such as its mesh override.
pub fn resolve_effective<'a>(
    element: &Element,
    presets: &FxHashMap<i32, &'a Preset>,
) -> (EffectiveConfig, Option<&'a Preset>) {
    let preset = element
        .spatial_element_preset_id
        .and_then(|id| presets.get(&id).copied());

    let over = element.element_override.as_ref();

    let config = EffectiveConfig {
        surface_model_type: over
            .and_then(|o| o.surface_model_type)
            .or(preset.map(|p| p.surface_model_type)),
        z_source: over
            .and_then(|o| o.z_surface_setting)
            .or(preset.map(|p| p.z_surface_setting)),
        shape_id: over
            .and_then(|o| o.spatial_shape_id)
            .or(preset.and_then(|p| p.spatial_shape_id)),
        style_id: over
            .and_then(|o| o.spatial_model_style_id)
            .or(preset.and_then(|p| p.spatial_model_style_id)),
        base_surface_id: over
            .and_then(|o| o.base_surface_id)
            .or(preset.and_then(|p| p.base_surface_id)),
        top_surface_id: over
            .and_then(|o| o.top_surface_id)
            .or(preset.and_then(|p| p.top_surface_id)),
        base_offset_in_m: over
            .and_then(|o| o.base_offset_in_m)
            .or(preset.and_then(|p| p.base_offset_in_m))
            .unwrap_or(0.0),
        top_offset_in_m: over
            .and_then(|o| o.top_offset_in_m)
            .or(preset.and_then(|p| p.top_offset_in_m))
            .unwrap_or(0.0),
        // The element's core height wins over the preset default.
        height_in_m: element.height_in_m.or(preset.and_then(|p| p.height_in_m)),
    };

    (config, preset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotmodel_contract::payload::ElementOverride;

    fn preset(id: i32) -> Preset {
        Preset {
            spatial_element_preset_id: id,
            unique_id: None,
            preset_name: None,
            spatial_model_style_id: Some(10),
            spatial_shape_id: Some(20),
            surface_model_type: SurfaceModelType::OneSurfaceTo3dMesh,
            z_surface_setting: ZSourceSetting::FromSurface,
            trim_priority: 0,
            interaction_effects: None,
            anchor_mode: None,
            anchor_x_offset_m: 0.0,
            anchor_y_offset_m: 0.0,
            rotation: 0,
            base_surface_id: Some(Uuid::new_v4()),
            top_surface_id: None,
            base_offset_in_m: Some(0.5),
            top_offset_in_m: None,
            height_in_m: Some(2.0),
            preset_mesh_override: None,
        }
    }

    fn index(presets: &[Preset]) -> FxHashMap<i32, &Preset> {
        presets
            .iter()
            .map(|p| (p.spatial_element_preset_id, p))
            .collect()
    }

    #[test]
    fn override_wins_over_preset() {
        let presets = vec![preset(1)];
        let element = Element {
            spatial_model_element_id: 1,
            spatial_element_preset_id: Some(1),
            element_override: Some(ElementOverride {
                surface_model_type: Some(SurfaceModelType::ExtrudeShapeAlongPath),
                ..ElementOverride::default()
            }),
            ..Element::default()
        };

        let (config, resolved) = resolve_effective(&element, &index(&presets));
        assert_eq!(
            config.surface_model_type,
            Some(SurfaceModelType::ExtrudeShapeAlongPath)
        );
        // Fields the override leaves unset still come from the preset.
        assert_eq!(config.z_source, Some(ZSourceSetting::FromSurface));
        assert_eq!(config.shape_id, Some(20));
        assert_eq!(config.base_offset_in_m, 0.5);
        assert!(resolved.is_some());
    }

    #[test]
    fn element_core_height_wins_over_preset_height() {
        let presets = vec![preset(1)];
        let element = Element {
            spatial_model_element_id: 1,
            spatial_element_preset_id: Some(1),
            height_in_m: Some(4.5),
            ..Element::default()
        };

        let (config, _) = resolve_effective(&element, &index(&presets));
        assert_eq!(config.height_in_m, Some(4.5));
    }

    #[test]
    fn unresolvable_preset_id_falls_back_silently() {
        let presets = vec![preset(1)];
        let element = Element {
            spatial_model_element_id: 1,
            spatial_element_preset_id: Some(99),
            ..Element::default()
        };

        let (config, resolved) = resolve_effective(&element, &index(&presets));
        assert!(resolved.is_none());
        assert_eq!(config.surface_model_type, None);
        assert_eq!(config.z_source, None);
        assert_eq!(config.shape_id, None);
        assert_eq!(config.height_in_m, None);
    }

    #[test]
    fn offsets_default_to_zero_when_both_layers_are_silent() {
        let element = Element::default();
        let (config, _) = resolve_effective(&element, &FxHashMap::default());
        assert_eq!(config.base_offset_in_m, 0.0);
        assert_eq!(config.top_offset_in_m, 0.0);
    }
}
