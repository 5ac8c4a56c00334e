// HTTP response utilities for relayed JSON and streamed HTML
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
    response::IntoResponse,
};
use bytes::Bytes;
use futures::Stream;

/// Relay an upstream JSON body byte-for-byte
pub fn json_relay_response(body: Bytes) -> Result<Response<Body>, StatusCode> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, HeaderValue::from(body.len()))
        .body(Body::from(body))
        .map_err(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// `{"error": message}` with the given status
pub fn json_error_response(status: StatusCode, message: &str) -> Response<Body> {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

/// Stream HTML chunks to the client as they are produced
pub fn html_stream_response<S>(chunks: S) -> Response<Body>
where
    S: Stream<Item = Result<Bytes, std::io::Error>> + Send + 'static,
{
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::CACHE_CONTROL, "no-store")
        .body(Body::from_stream(chunks));

    match response {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Turn a rendered template into a body chunk; a render failure ends the stream
pub fn html_chunk(rendered: Result<String, askama::Error>) -> Result<Bytes, std::io::Error> {
    rendered.map(Bytes::from).map_err(|e| {
        tracing::error!("Template render error: {}", e);
        std::io::Error::other(e)
    })
}
