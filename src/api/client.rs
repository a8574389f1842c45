//! HTTP Client Wrapper
//!
//! The single fetch helper every screen goes through. Response handling is
//! split into pure functions so the normalization rules can be checked
//! without a network.

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::ApiError;
use crate::config::{ApiConfig, TUNNEL_BYPASS_HEADER};

// ========================
// Request Bodies
// ========================

/// A file read from an `<input type="file">`
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MultipartField {
    Text { name: String, value: String },
    File { name: String, upload: Upload },
}

impl MultipartField {
    pub fn text(name: &str, value: &str) -> Self {
        MultipartField::Text { name: name.to_string(), value: value.to_string() }
    }

    pub fn file(name: &str, upload: Upload) -> Self {
        MultipartField::File { name: name.to_string(), upload }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(String),
    Multipart(Vec<MultipartField>),
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config, http: reqwest::Client::new() }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue one request and normalize the outcome.
    ///
    /// Returns the parsed JSON body, or `None` for an empty (or non-JSON)
    /// 2xx body. The body is read exactly once.
    pub async fn request(&self, method: Method, path: &str, body: Body) -> Result<Option<Value>, ApiError> {
        let url = self.config.url(path);
        log::debug!("[API] {} {}", method, url);

        let mut builder = self.http.request(method.clone(), &url);
        if self.config.tunnel_bypass {
            builder = builder.header(TUNNEL_BYPASS_HEADER, "true");
        }
        builder = match body {
            Body::Empty => builder.header(CONTENT_TYPE, "application/json"),
            Body::Json(text) => builder.header(CONTENT_TYPE, "application/json").body(text),
            // The multipart boundary header is set by the transport
            Body::Multipart(fields) => builder.multipart(build_form(fields)?),
        };

        let response = builder.send().await?;
        let status = response.status();
        let raw = response.text().await?;

        let result = settle_response(status.as_u16(), status.canonical_reason().unwrap_or(""), &raw);
        if let Err(e) = &result {
            log::warn!("[API] {} {} failed: {}", method, url, e);
        }
        result
    }

    pub async fn get(&self, path: &str) -> Result<Option<Value>, ApiError> {
        self.request(Method::GET, path, Body::Empty).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Option<Value>, ApiError> {
        self.request(Method::POST, path, Body::Json(serde_json::to_string(body)?)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Option<Value>, ApiError> {
        self.request(Method::PUT, path, Body::Json(serde_json::to_string(body)?)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Option<Value>, ApiError> {
        self.request(Method::DELETE, path, Body::Empty).await
    }

    pub async fn put_multipart(&self, path: &str, fields: Vec<MultipartField>) -> Result<Option<Value>, ApiError> {
        self.request(Method::PUT, path, Body::Multipart(fields)).await
    }

    /// GET a collection; a non-array body is an empty list
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        decode_list(self.get(path).await?)
    }

    /// POST/PUT/DELETE whose 2xx body may still report a rejection
    pub async fn submit<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> Result<Option<Value>, ApiError> {
        let data = match method {
            Method::POST => self.post(path, body).await?,
            Method::PUT => self.put(path, body).await?,
            other => self.request(other, path, Body::Json(serde_json::to_string(body)?)).await?,
        };
        accepted(data)
    }
}

fn build_form(fields: Vec<MultipartField>) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for field in fields {
        form = match field {
            MultipartField::Text { name, value } => form.text(name, value),
            MultipartField::File { name, upload } => {
                let mime = if upload.mime.is_empty() { "application/octet-stream".to_string() } else { upload.mime };
                let part = Part::bytes(upload.bytes).file_name(upload.file_name).mime_str(&mime)?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

// ========================
// Response Normalization
// ========================

/// Empty or unparseable bodies (and a literal `null`) are `None`
pub fn parse_body(raw: &str) -> Option<Value> {
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Null) | Err(_) => None,
        Ok(value) => Some(value),
    }
}

/// Map status + body to the call result.
///
/// Error text priority: `error` field, `message` field, raw body, status line.
pub fn settle_response(status: u16, reason: &str, raw: &str) -> Result<Option<Value>, ApiError> {
    let data = parse_body(raw);
    if (200..300).contains(&status) {
        return Ok(data);
    }
    let message = data
        .as_ref()
        .and_then(|d| text_field(d, "error").or_else(|| text_field(d, "message")))
        .or_else(|| (!raw.is_empty()).then(|| raw.to_string()))
        .unwrap_or_else(|| format!("HTTP {} {}", status, reason).trim_end().to_string());
    Err(ApiError::Status { status, message })
}

/// Treat a 2xx `{"error": "..."}` body as a rejection
pub fn accepted(data: Option<Value>) -> Result<Option<Value>, ApiError> {
    match data.as_ref().and_then(|d| text_field(d, "error")) {
        Some(message) => Err(ApiError::Rejected(message)),
        None => Ok(data),
    }
}

pub fn decode_list<T: DeserializeOwned>(data: Option<Value>) -> Result<Vec<T>, ApiError> {
    match data {
        Some(list @ Value::Array(_)) => Ok(serde_json::from_value(list)?),
        _ => Ok(Vec::new()),
    }
}

fn text_field(data: &Value, key: &str) -> Option<String> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{delete, get, post, put};
    use axum::{Json, Router};
    use serde::Deserialize;
    use serde_json::json;

    // ========================
    // Pure normalization
    // ========================

    #[test]
    fn test_parse_body_empty_and_invalid() {
        assert_eq!(parse_body(""), None);
        assert_eq!(parse_body("<html>oops</html>"), None);
        assert_eq!(parse_body("null"), None);
        assert_eq!(parse_body(r#"[1,2]"#), Some(json!([1, 2])));
    }

    #[test]
    fn test_success_returns_parsed_json() {
        let data = settle_response(200, "OK", r#"{"id":7}"#).unwrap();
        assert_eq!(data, Some(json!({"id": 7})));
    }

    #[test]
    fn test_success_with_empty_body_is_none() {
        assert_eq!(settle_response(204, "No Content", "").unwrap(), None);
    }

    #[test]
    fn test_error_prefers_error_field() {
        let err = settle_response(400, "Bad Request", r#"{"error":"Region exists","message":"other"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Region exists");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_error_falls_back_to_message_field() {
        let err = settle_response(404, "Not Found", r#"{"message":"No such city"}"#).unwrap_err();
        assert_eq!(err.to_string(), "No such city");
    }

    #[test]
    fn test_error_falls_back_to_raw_body() {
        let err = settle_response(500, "Internal Server Error", "database offline").unwrap_err();
        assert_eq!(err.to_string(), "database offline");

        let err = settle_response(422, "Unprocessable Entity", r#"{"detail":"x"}"#).unwrap_err();
        assert_eq!(err.to_string(), r#"{"detail":"x"}"#);
    }

    #[test]
    fn test_error_falls_back_to_status_line() {
        let err = settle_response(503, "Service Unavailable", "").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 503 Service Unavailable");

        let err = settle_response(599, "", "").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 599");
    }

    #[test]
    fn test_accepted_rejects_embedded_error() {
        let err = accepted(Some(json!({"error": "duplicate name"}))).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(ref m) if m == "duplicate name"));
        assert_eq!(accepted(Some(json!({"message": "ok"}))).unwrap(), Some(json!({"message": "ok"})));
        assert_eq!(accepted(None).unwrap(), None);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
    }

    #[test]
    fn test_decode_list_non_array_is_empty() {
        let rows: Vec<Row> = decode_list(Some(json!({"error": "nope"}))).unwrap();
        assert!(rows.is_empty());
        let rows: Vec<Row> = decode_list(None).unwrap();
        assert!(rows.is_empty());
        let rows: Vec<Row> = decode_list(Some(json!([{"id": 1}, {"id": 2}]))).unwrap();
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn test_decode_list_bad_rows_is_decode_error() {
        let result: Result<Vec<Row>, _> = decode_list(Some(json!([{"id": "x"}])));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    // ========================
    // Against a local backend
    // ========================

    fn header(headers: &HeaderMap, name: &str) -> Option<String> {
        headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned)
    }

    async fn echo(headers: HeaderMap, body: String) -> Json<Value> {
        Json(json!({
            "content_type": header(&headers, "content-type"),
            "bypass": header(&headers, TUNNEL_BYPASS_HEADER),
            "body": body,
        }))
    }

    async fn upload(headers: HeaderMap, body: String) -> (StatusCode, Json<Value>) {
        let content_type = header(&headers, "content-type").unwrap_or_default();
        if !content_type.starts_with("multipart/form-data") {
            return (StatusCode::BAD_REQUEST, Json(json!({"error": format!("wrong type {}", content_type)})));
        }
        let reply = json!({
            "closed": body.contains("name=\"STATUS\"") && body.contains("CLOSED"),
            "images": body.matches("name=\"closing_images[]\"").count(),
        });
        (StatusCode::OK, Json(reply))
    }

    async fn spawn_backend() -> ApiClient {
        let app = Router::new()
            .route("/api/region/", get(|| async { Json(json!([{"id": 1}, {"id": 2}])) }))
            .route("/api/region/9", delete(|| async { StatusCode::NO_CONTENT }))
            .route(
                "/api/region/dup",
                post(|| async { (StatusCode::CONFLICT, Json(json!({"error": "Region exists"}))) }),
            )
            .route(
                "/api/city/5",
                put(|| async { (StatusCode::NOT_FOUND, Json(json!({"message": "No such city"}))) }),
            )
            .route(
                "/api/raw",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database offline") }),
            )
            .route("/api/bare", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
            .route("/api/soft-error", post(|| async { Json(json!({"error": "duplicate name"})) }))
            .route("/api/echo", post(echo).put(echo))
            .route("/api/workorders/3", put(upload));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind test backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test backend");
        });
        ApiClient::new(ApiConfig::with_base(format!("http://{}", addr)))
    }

    #[tokio::test]
    async fn test_get_list_over_http() {
        let client = spawn_backend().await;
        let rows: Vec<Row> = client.get_list("/api/region/").await.expect("list regions");
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_no_content_is_none() {
        let client = spawn_backend().await;
        assert_eq!(client.delete("/api/region/9").await.expect("delete"), None);
    }

    #[tokio::test]
    async fn test_error_messages_over_http() {
        let client = spawn_backend().await;

        let err = client.post("/api/region/dup", &json!({"region_name": "North"})).await.unwrap_err();
        assert_eq!(err.to_string(), "Region exists");
        assert_eq!(err.status(), Some(409));

        let err = client.put("/api/city/5", &json!({"city_name": "X"})).await.unwrap_err();
        assert_eq!(err.to_string(), "No such city");

        let err = client.get("/api/raw").await.unwrap_err();
        assert_eq!(err.to_string(), "database offline");

        let err = client.get("/api/bare").await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 503 Service Unavailable");
    }

    #[tokio::test]
    async fn test_submit_rejects_soft_error() {
        let client = spawn_backend().await;
        let err = client
            .submit(Method::POST, "/api/soft-error", &json!({"region_name": "North"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected(_)));
    }

    #[tokio::test]
    async fn test_submit_sends_json_for_post_and_put() {
        let client = spawn_backend().await;
        for method in [Method::POST, Method::PUT] {
            let echoed = client
                .submit(method, "/api/echo", &json!({"city_name": "Pune"}))
                .await
                .expect("submit")
                .expect("echo body");
            assert_eq!(echoed["content_type"], "application/json");
            assert_eq!(echoed["body"], r#"{"city_name":"Pune"}"#);
        }
    }

    #[tokio::test]
    async fn test_json_requests_carry_headers() {
        let client = spawn_backend().await;
        let echoed = client
            .post("/api/echo", &json!({"email": "a@b.com"}))
            .await
            .expect("echo")
            .expect("echo body");
        assert_eq!(echoed["content_type"], "application/json");
        assert_eq!(echoed["bypass"], "true");
        assert_eq!(echoed["body"], r#"{"email":"a@b.com"}"#);
    }

    #[tokio::test]
    async fn test_multipart_skips_json_content_type() {
        let client = spawn_backend().await;
        let image = Upload {
            file_name: "done.txt".to_string(),
            mime: "text/plain".to_string(),
            bytes: b"site photo".to_vec(),
        };
        let fields = vec![
            MultipartField::text("STATUS", "CLOSED"),
            MultipartField::file("closing_images[]", image.clone()),
            MultipartField::file("closing_images[]", image),
        ];
        let reply = client
            .put_multipart("/api/workorders/3", fields)
            .await
            .expect("upload")
            .expect("upload body");
        assert_eq!(reply["closed"], true);
        assert_eq!(reply["images"], 2);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let client = ApiClient::new(ApiConfig::with_base(format!("http://{}", addr)));
        let err = client.get("/api/region/").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
