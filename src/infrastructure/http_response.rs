// HTTP response utilities with optional Brotli encoding
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Response, StatusCode, header},
};
use tokio::io::AsyncReadExt;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Check if the client accepts Brotli compression
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.contains("br"))
        .unwrap_or(false)
}

pub async fn brotli_compress(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = BrotliEncoder::new(bytes);
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed).await?;
    Ok(compressed)
}

/// Build a 200 response for a pre-rendered document, compressing it when asked to
pub async fn document_response(
    document: &str,
    content_type: &'static str,
    compress: bool,
) -> Result<Response<Body>, StatusCode> {
    let raw = document.as_bytes();

    let (body_bytes, content_encoding) = if compress {
        let compressed = brotli_compress(raw).await.map_err(|e| {
            tracing::error!("Brotli compression error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::debug!(
            "Compressed {} → {} bytes ({:.1}% reduction)",
            raw.len(),
            compressed.len(),
            (1.0 - compressed.len() as f64 / raw.len().max(1) as f64) * 100.0
        );
        (compressed, Some("br"))
    } else {
        (raw.to_vec(), None)
    };

    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HeaderValue::from_static(content_type))
        .header(header::CONTENT_LENGTH, body_bytes.len());

    if let Some(encoding) = content_encoding {
        response_builder = response_builder.header(header::CONTENT_ENCODING, encoding);
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
