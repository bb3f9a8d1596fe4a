//! Browser-like header set sent with every request
//!
//! The base set is built fresh on each call and never mutated in place;
//! sessions and individual calls layer their auth header on a copy.

use matchfarm_core::{Error, Result};
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE,
    ORIGIN, REFERER, USER_AGENT,
};

const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Linux; Android 10; Redmi 4A / 5A Build/QQ3A.200805.001; wv) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/86.0.4240.185 Mobile Safari/537.36";

/// Static headers that mimic the Telegram in-app webview
pub fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en,en-US;q=0.9"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://tgapp.matchain.io"));
    headers.insert(REFERER, HeaderValue::from_static("https://tgapp.matchain.io/"));
    headers.insert(
        HeaderName::from_static("x-requested-with"),
        HeaderValue::from_static("tw.nekomimi.nekogram"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("same-site"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("cors"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("empty"),
    );

    headers
}

/// Copy of `headers` carrying `token` as the authorization header
pub fn with_authorization(headers: &HeaderMap, token: &str) -> Result<HeaderMap> {
    let value = HeaderValue::from_str(token)
        .map_err(|e| Error::AuthenticationError(format!("token is not a valid header value: {}", e)))?;

    let mut overlay = headers.clone();
    overlay.insert(AUTHORIZATION, value);
    Ok(overlay)
}
