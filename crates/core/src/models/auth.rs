//! Login and balance request/response bodies

use super::account::Credential;
use serde::{Deserialize, Serialize};

/// Body of `POST /user/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub uid: i64,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub username: &'a str,
    pub tg_login_params: &'a str,
}

impl<'a> From<&'a Credential> for LoginRequest<'a> {
    fn from(credential: &'a Credential) -> Self {
        let identity = credential.identity();
        LoginRequest {
            uid: identity.id,
            first_name: &identity.first_name,
            last_name: &identity.last_name,
            username: &identity.username,
            tg_login_params: credential.raw(),
        }
    }
}

/// `data` of a successful login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub token: Option<String>,
}

/// Body shared by every endpoint keyed on the user id alone
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UidRequest {
    pub uid: i64,
}
