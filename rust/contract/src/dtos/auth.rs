// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection and secret DTOs for the spatial API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Connection settings for one spatial API tenant.
///
/// `secret_key` is a reference into the caller's encrypted key-value store,
/// not the secret itself where avoidable. It is skipped on serialization so
/// the value never leaks into logs or persisted config dumps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpatialApiConnectionInfo {
    /// Base URL, e.g. `https://spatialapi.yourdomain.com`.
    pub base_url: String,

    /// Relative path to the token endpoint. Differs between environments.
    pub token_path: String,

    pub client_id: Uuid,

    #[serde(skip_serializing, default)]
    pub secret_key: Option<String>,
}

impl SpatialApiConnectionInfo {
    pub fn new(base_url: impl Into<String>, token_path: impl Into<String>, client_id: Uuid) -> Self {
        Self {
            base_url: base_url.into(),
            token_path: token_path.into(),
            client_id,
            secret_key: None,
        }
    }

    pub fn clear_key(&mut self) {
        self.secret_key = None;
    }

    pub fn set_secret_value(&mut self, value: impl Into<String>) {
        self.secret_key = Some(value.into());
    }
}

/// Replaces the stored connection details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAuthInfoRequest {
    pub details: SpatialApiConnectionInfo,
}

/// Returned when the spatial API mints a new client secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSecretResponse {
    pub client_id: Uuid,
    pub client_secret_id: Uuid,
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_key_is_never_serialized() {
        let mut info =
            SpatialApiConnectionInfo::new("https://spatial.example", "/auth/GetToken", Uuid::new_v4());
        info.set_secret_value("kv-ref-123");
        let json = serde_json::to_string(&info).unwrap();
        assert!(!json.contains("kv-ref-123"));
        assert!(!json.contains("SecretKey"));

        info.clear_key();
        assert_eq!(info.secret_key, None);
    }
}
