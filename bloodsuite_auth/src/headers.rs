use crate::error::AuthError;

/// Pulls the bearer token out of the `Authorization` header.
pub fn extract_access_token_from_request_headers(
    headers: &axum::http::HeaderMap,
) -> Result<String, AuthError> {
    let auth_token_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let Some(auth_token) = auth_token_header else {
        tracing::trace!("no Authorization header provided");
        return Err(AuthError::NoAccessTokenProvided);
    };

    let auth_token_parts = auth_token.split("Bearer ").collect::<Vec<&str>>();
    if auth_token_parts.len() != 2 {
        return Err(AuthError::InvalidAuthorizationHeaderFormat);
    }

    Ok(auth_token_parts[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

    #[test]
    fn test_extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));

        let token = extract_access_token_from_request_headers(&headers).unwrap();
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        let err = extract_access_token_from_request_headers(&headers).unwrap_err();
        assert!(matches!(err, AuthError::NoAccessTokenProvided));
    }

    #[test]
    fn test_malformed_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Token abc"));

        let err = extract_access_token_from_request_headers(&headers).unwrap_err();
        assert!(matches!(err, AuthError::InvalidAuthorizationHeaderFormat));
    }
}
