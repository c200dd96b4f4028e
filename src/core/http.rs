use std::time::Duration;

use reqwest::{
    header::{
        HeaderMap,
        HeaderValue,
        AUTHORIZATION,
        USER_AGENT,
    },
    StatusCode,
};

use crate::core::VocBuilderError;

const CLIENT_USER_AGENT: &str = "voc-builder/0.1 (+reqwest)";

/// Headers sent with every study-list request.
pub fn auth_headers(access_key: &str) -> Result<HeaderMap, VocBuilderError> {
    let mut headers = HeaderMap::new();
    let mut auth = HeaderValue::from_str(access_key)
        .map_err(|e| VocBuilderError::Custom(format!("Invalid access key header: {e}")))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
    Ok(headers)
}

pub fn blocking_client(
    access_key: &str,
    timeout: Duration,
) -> Result<reqwest::blocking::Client, VocBuilderError> {
    reqwest::blocking::Client::builder()
        .default_headers(auth_headers(access_key)?)
        .timeout(timeout)
        .build()
        .map_err(|e| VocBuilderError::Custom(format!("HTTP client build failed: {e}")))
}

pub fn async_client(access_key: &str, timeout: Duration) -> Result<reqwest::Client, VocBuilderError> {
    reqwest::Client::builder()
        .default_headers(auth_headers(access_key)?)
        .timeout(timeout)
        .build()
        .map_err(|e| VocBuilderError::Custom(format!("HTTP client build failed: {e}")))
}

/// Passes the body through on success, otherwise wraps status and body in an error.
pub fn ensure_success(status: StatusCode, body: String) -> Result<String, VocBuilderError> {
    if !status.is_success() {
        return Err(VocBuilderError::RemoteService { status: status.as_u16(), body });
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_headers() {
        let headers = auth_headers("secret-key").unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "secret-key");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
        assert!(headers.contains_key(USER_AGENT));
    }

    #[test]
    fn test_auth_headers_rejects_newlines() {
        assert!(auth_headers("bad\nkey").is_err());
    }

    #[test]
    fn test_ensure_success() {
        assert_eq!(ensure_success(StatusCode::OK, "{}".to_string()).unwrap(), "{}");

        let err = ensure_success(StatusCode::NOT_FOUND, "nope".to_string()).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some("nope"));
    }
}
