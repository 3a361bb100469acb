//! Helpers for invoking handlers directly with constructed extractors.

use axum::{
    body::Body,
    extract::{FromRequest, Multipart},
    http::{header::CONTENT_TYPE, Request},
    response::Response,
};

static BOUNDARY: &str = "vantage-test-boundary";

/// Build a multipart/form-data request from named parts.
///
/// Text parts are written verbatim; the part named `image` is written as a
/// binary file part.
pub fn multipart_request(parts: &[(&str, &[u8])]) -> Request<Body> {
    let mut body = Vec::new();

    for (name, value) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());

        if *name == "image" {
            body.extend_from_slice(
                b"Content-Disposition: form-data; name=\"image\"; filename=\"image.png\"\r\n\
                  Content-Type: application/octet-stream\r\n\r\n",
            );
        } else {
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
            );
        }

        body.extend_from_slice(value);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Materialize the axum multipart extractor from a request
pub async fn multipart_from(request: Request<Body>) -> Multipart {
    Multipart::from_request(request, &()).await.unwrap()
}

/// Deserialize a response body as JSON
pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
