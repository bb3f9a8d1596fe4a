//! Account credentials and the identity they carry

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Identity fields embedded in the `user` parameter of a credential line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountIdentity {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
}

/// One line of the account file
///
/// The raw payload is kept untouched because the login request forwards
/// it verbatim as `tg_login_params`.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    raw: String,
    identity: AccountIdentity,
}

impl Credential {
    /// Decode a raw query-string credential into identity fields
    pub fn parse(raw: &str) -> Result<Self> {
        let user = url::form_urlencoded::parse(raw.as_bytes())
            .find(|(key, _)| key == "user")
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| Error::InvalidCredential("missing `user` parameter".to_string()))?;

        let identity = match serde_json::from_str::<AccountIdentity>(&user) {
            Ok(identity) => identity,
            // Some exports double-encode the JSON blob
            Err(first) => {
                let decoded = urlencoding::decode(&user)
                    .map_err(|_| Error::InvalidCredential(first.to_string()))?;
                serde_json::from_str(&decoded)
                    .map_err(|e| Error::InvalidCredential(e.to_string()))?
            }
        };

        Ok(Self {
            raw: raw.to_string(),
            identity,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn identity(&self) -> &AccountIdentity {
        &self.identity
    }

    pub fn uid(&self) -> i64 {
        self.identity.id
    }
}
