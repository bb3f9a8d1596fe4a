//! Transport response envelope

use crate::api::Endpoint;
use matchfarm_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP status plus the parsed JSON body, if any
///
/// The service wraps payloads as `{ "code": .., "msg": .., "data": .. }`;
/// `code` is an application status that can disagree with the HTTP one.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// HTTP 200
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Application-level `code`
    pub fn code(&self) -> Option<i64> {
        self.body.as_ref()?.get("code")?.as_i64()
    }

    /// Raw `data` field, treating JSON null as absent
    pub fn raw_data(&self) -> Option<&Value> {
        self.body.as_ref()?.get("data").filter(|v| !v.is_null())
    }

    /// Deserialize the `data` field
    pub fn data<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let data = self
            .raw_data()
            .ok_or_else(|| Error::InvalidData(format!("{}: response has no data", endpoint)))?;
        T::deserialize(data).map_err(|e| Error::InvalidData(format!("{}: {}", endpoint, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_accessors() {
        let response = ApiResponse::new(200, Some(json!({"code": 400, "msg": "done", "data": 12})));
        assert!(response.is_ok());
        assert_eq!(response.code(), Some(400));
        assert_eq!(response.data::<i64>(Endpoint::Balance).unwrap(), 12);
    }

    #[test]
    fn test_null_data_is_missing() {
        let response = ApiResponse::new(200, Some(json!({"code": 200, "data": null})));
        assert!(response.raw_data().is_none());
        assert!(matches!(
            response.data::<i64>(Endpoint::Balance),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_empty_body() {
        let response = ApiResponse::new(500, None);
        assert!(!response.is_ok());
        assert_eq!(response.code(), None);
    }
}
