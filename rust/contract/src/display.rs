// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Presentation metadata for interaction-effect parameters.
//!
//! UIs show only the args fields relevant to the selected action. The
//! per-action field lists are static lookup tables, not runtime reflection.
//! Length values are persisted in metres and converted on render according
//! to [`UnitPreferences`].

use serde::{Deserialize, Serialize};

use crate::enums::{InteractionAction, LengthUnit};
use crate::interaction::InteractionEffectArgs;

/// How lengths are rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPreferences {
    pub length_unit: LengthUnit,
    pub length_decimals: usize,
    pub include_unit_suffix: bool,
}

impl Default for UnitPreferences {
    fn default() -> Self {
        Self {
            length_unit: LengthUnit::Metre,
            length_decimals: 3,
            include_unit_suffix: true,
        }
    }
}

impl LengthUnit {
    /// Conversion factor from metres into this unit.
    fn per_metre(self) -> f64 {
        match self {
            LengthUnit::Metre => 1.0,
            LengthUnit::Millimetre => 1000.0,
            LengthUnit::Foot => 1.0 / 0.3048,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Metre => "m",
            LengthUnit::Millimetre => "mm",
            LengthUnit::Foot => "ft",
        }
    }
}

/// Renders a length stored in metres according to `prefs`.
pub fn format_length(metres: f64, prefs: &UnitPreferences) -> String {
    let value = metres * prefs.length_unit.per_metre();
    if prefs.include_unit_suffix {
        format!("{:.*} {}", prefs.length_decimals, value, prefs.length_unit.suffix())
    } else {
        format!("{:.*}", prefs.length_decimals, value)
    }
}

/// Data type of one args field, for UI widget selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgFieldType {
    Decimal,
    Boolean,
    String,
    Enum,
}

/// One visible args field for a given action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArgFieldDescriptor {
    /// Wire name of the field on [`InteractionEffectArgs`].
    pub name: &'static str,
    pub label: &'static str,
    pub field_type: ArgFieldType,
    pub required: bool,
    pub help: Option<&'static str>,
}

const TERMINATE_FIELDS: &[ArgFieldDescriptor] = &[
    ArgFieldDescriptor {
        name: "Boundary",
        label: "Terminate at",
        field_type: ArgFieldType::Enum,
        required: false,
        help: Some("Inner face / outer face / etc."),
    },
    ArgFieldDescriptor {
        name: "OffsetM",
        label: "Terminate offset (m)",
        field_type: ArgFieldType::Decimal,
        required: false,
        help: Some("Stop short/long by this amount."),
    },
    ArgFieldDescriptor {
        name: "KeepInside",
        label: "Keep inside",
        field_type: ArgFieldType::Boolean,
        required: false,
        help: Some("Keep only inside portion after trimming."),
    },
    ArgFieldDescriptor {
        name: "ClearanceM",
        label: "Clearance (m)",
        field_type: ArgFieldType::Decimal,
        required: false,
        help: None,
    },
    ArgFieldDescriptor {
        name: "Notes",
        label: "Notes",
        field_type: ArgFieldType::String,
        required: false,
        help: None,
    },
];

const TRIM_FIELDS: &[ArgFieldDescriptor] = &[
    ArgFieldDescriptor {
        name: "Boundary",
        label: "Trim to",
        field_type: ArgFieldType::Enum,
        required: false,
        help: None,
    },
    ArgFieldDescriptor {
        name: "OffsetM",
        label: "Offset (m)",
        field_type: ArgFieldType::Decimal,
        required: false,
        help: None,
    },
    ArgFieldDescriptor {
        name: "ClearanceM",
        label: "Clearance (m)",
        field_type: ArgFieldType::Decimal,
        required: false,
        help: None,
    },
    ArgFieldDescriptor {
        name: "Notes",
        label: "Notes",
        field_type: ArgFieldType::String,
        required: false,
        help: None,
    },
];

const ADD_OPENING_FIELDS: &[ArgFieldDescriptor] = &[
    ArgFieldDescriptor {
        name: "OpeningOversizeM",
        label: "Opening oversize (m)",
        field_type: ArgFieldType::Decimal,
        required: false,
        help: Some("Oversize applied to opening profile."),
    },
    ArgFieldDescriptor {
        name: "ClearanceM",
        label: "Clearance (m)",
        field_type: ArgFieldType::Decimal,
        required: false,
        help: Some("Alternative oversize/clearance."),
    },
    ArgFieldDescriptor {
        name: "ThroughAll",
        label: "Through all",
        field_type: ArgFieldType::Boolean,
        required: false,
        help: Some("Penetrate full thickness."),
    },
    ArgFieldDescriptor {
        name: "Notes",
        label: "Notes",
        field_type: ArgFieldType::String,
        required: false,
        help: None,
    },
];

const STEP_OVER_FIELDS: &[ArgFieldDescriptor] = &[
    ArgFieldDescriptor {
        name: "StepDeltaM",
        label: "Step (m)",
        field_type: ArgFieldType::Decimal,
        required: true,
        help: Some("Raise/lower amount."),
    },
    ArgFieldDescriptor {
        name: "MinCoverM",
        label: "Min cover (m)",
        field_type: ArgFieldType::Decimal,
        required: false,
        help: None,
    },
    ArgFieldDescriptor {
        name: "ClearanceM",
        label: "Clearance (m)",
        field_type: ArgFieldType::Decimal,
        required: false,
        help: None,
    },
    ArgFieldDescriptor {
        name: "Notes",
        label: "Notes",
        field_type: ArgFieldType::String,
        required: false,
        help: None,
    },
];

const COMMON_FIELDS: &[ArgFieldDescriptor] = &[
    ArgFieldDescriptor {
        name: "ClearanceM",
        label: "Clearance (m)",
        field_type: ArgFieldType::Decimal,
        required: false,
        help: None,
    },
    ArgFieldDescriptor {
        name: "OffsetM",
        label: "Offset (m)",
        field_type: ArgFieldType::Decimal,
        required: false,
        help: None,
    },
    ArgFieldDescriptor {
        name: "Boundary",
        label: "Boundary",
        field_type: ArgFieldType::Enum,
        required: false,
        help: None,
    },
    ArgFieldDescriptor {
        name: "ThroughAll",
        label: "Through all",
        field_type: ArgFieldType::Boolean,
        required: false,
        help: None,
    },
    ArgFieldDescriptor {
        name: "Notes",
        label: "Notes",
        field_type: ArgFieldType::String,
        required: false,
        help: None,
    },
];

/// Ordered list of args fields a UI should show for `action`.
pub fn describe_fields(action: InteractionAction) -> &'static [ArgFieldDescriptor] {
    match action {
        InteractionAction::Terminate => TERMINATE_FIELDS,
        InteractionAction::TrimToBoundary => TRIM_FIELDS,
        InteractionAction::AddOpening => ADD_OPENING_FIELDS,
        InteractionAction::StepOver => STEP_OVER_FIELDS,
        _ => COMMON_FIELDS,
    }
}

/// Renders the current value of one described field, or `None` when the
/// field is unset or unknown. Lengths are converted per `prefs`.
pub fn display_value(
    args: &InteractionEffectArgs,
    field_name: &str,
    prefs: &UnitPreferences,
) -> Option<String> {
    let length = |v: Option<f64>| v.map(|m| format_length(m, prefs));
    let flag = |v: Option<bool>| v.map(|b| if b { "yes" } else { "no" }.to_owned());

    match field_name {
        "ClearanceM" => length(args.clearance_m),
        "OffsetM" => length(args.offset_m),
        "OpeningOversizeM" => length(args.opening_oversize_m),
        "StepDeltaM" => length(args.step_delta_m),
        "MinCoverM" => length(args.min_cover_m),
        "ThroughAll" => flag(args.through_all),
        "KeepInside" => flag(args.keep_inside),
        "Boundary" => args.boundary.map(|b| format!("{b:?}")),
        "Notes" => args.notes.clone(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_length_converts_and_suffixes() {
        let metric = UnitPreferences::default();
        assert_eq!(format_length(1.2345, &metric), "1.234 m");

        let mm = UnitPreferences {
            length_unit: LengthUnit::Millimetre,
            length_decimals: 0,
            include_unit_suffix: true,
        };
        assert_eq!(format_length(0.05, &mm), "50 mm");

        let bare = UnitPreferences {
            length_unit: LengthUnit::Foot,
            length_decimals: 2,
            include_unit_suffix: false,
        };
        assert_eq!(format_length(0.3048, &bare), "1.00");
    }

    #[test]
    fn step_over_shows_a_required_step_field_first() {
        let fields = describe_fields(InteractionAction::StepOver);
        assert_eq!(fields[0].name, "StepDeltaM");
        assert!(fields[0].required);
    }

    #[test]
    fn unlisted_actions_fall_back_to_common_fields() {
        let fields = describe_fields(InteractionAction::ClearanceOnly);
        assert_eq!(fields, COMMON_FIELDS);
    }

    #[test]
    fn display_value_renders_set_fields_only() {
        let args = InteractionEffectArgs {
            clearance_m: Some(0.05),
            through_all: Some(true),
            ..InteractionEffectArgs::default()
        };
        let prefs = UnitPreferences::default();
        assert_eq!(display_value(&args, "ClearanceM", &prefs), Some("0.050 m".to_owned()));
        assert_eq!(display_value(&args, "ThroughAll", &prefs), Some("yes".to_owned()));
        assert_eq!(display_value(&args, "OffsetM", &prefs), None);
        assert_eq!(display_value(&args, "NoSuchField", &prefs), None);
    }
}
