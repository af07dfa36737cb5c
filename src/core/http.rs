use crate::utils::error::Result;
use bytes::Bytes;
use http_body_util::Full;
use hyper::{header, Response, StatusCode};
use serde::Serialize;

pub type HttpResponse = Response<Full<Bytes>>;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const CSS_CONTENT_TYPE: &str = "text/css; charset=utf-8";
pub const JSON_CONTENT_TYPE: &str = "application/json";

pub fn respond(
    status: StatusCode,
    content_type: &str,
    body: impl Into<Bytes>,
) -> Result<HttpResponse> {
    let response = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(Full::new(body.into()))?;
    Ok(response)
}

pub fn html(status: StatusCode, body: String) -> Result<HttpResponse> {
    respond(status, HTML_CONTENT_TYPE, body)
}

pub fn css(body: String) -> Result<HttpResponse> {
    respond(StatusCode::OK, CSS_CONTENT_TYPE, body)
}

pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<HttpResponse> {
    let body = serde_json::to_vec(value)?;
    respond(status, JSON_CONTENT_TYPE, body)
}

pub fn with_allow(mut response: HttpResponse, allowed: &'static str) -> HttpResponse {
    response
        .headers_mut()
        .insert(header::ALLOW, header::HeaderValue::from_static(allowed));
    response
}

/// 處理器失敗時的回應，不會再失敗
pub fn internal_error() -> HttpResponse {
    let mut response = Response::new(Full::new(Bytes::from_static(b"Internal Server Error")));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}


#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_html_body_and_headers() {
        let response = html(StatusCode::OK, "<p>hi</p>".to_string()).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], HTML_CONTENT_TYPE);
        let body = tokio_test::block_on(response.into_body().collect())
            .unwrap()
            .to_bytes();
        assert_eq!(&body[..], b"<p>hi</p>");
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(internal_error().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_json_content_type() {
        let response = json(StatusCode::OK, &serde_json::json!({"status": "UP"})).unwrap();
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
    }
}
