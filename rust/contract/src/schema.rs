// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schema identity for the job payload contract.
//!
//! Producers stamp each payload with the schema version, contract name and a
//! hash of the section layout so the consuming service can reject payloads
//! built against a different contract revision before doing any work.

use sha2::{Digest, Sha256};

/// Current revision of the payload contract.
pub const SCHEMA_VERSION: i32 = 1;

/// Wire name of the contract.
pub const CONTRACT_NAME: &str = "SpatialModelJobPayload";

/// Top-level payload sections, in wire order. Frozen per schema version.
const SCHEMA_SECTIONS: &[&str] = &[
    "Model",
    "Elements",
    "Geometries",
    "CoordinateSystems",
    "LstLotInfo",
    "LstWorkTypes",
    "Presets",
    "Shapes",
    "Styles",
];

/// SHA-256 over the contract name, schema version and section layout,
/// hex-encoded. Stable for a given `SCHEMA_VERSION`.
pub fn schema_hash() -> String {
    let mut hasher = Sha256::new();
    hasher.update(CONTRACT_NAME.as_bytes());
    hasher.update(SCHEMA_VERSION.to_le_bytes());
    for section in SCHEMA_SECTIONS {
        hasher.update(section.as_bytes());
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}
