//! Request-to-file resolution and response building.

use std::path::{Component, Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{header, Method, Request, Response, StatusCode};

/// Serve one request from the document root.
/// Per-request failures answer 404/405 and log a warning — never a crash.
pub async fn respond<B>(root: &Path, req: Request<B>) -> Response<Full<Bytes>> {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return status_page(StatusCode::METHOD_NOT_ALLOWED);
    }

    let Some(rel) = resolve_request_path(req.uri().path()) else {
        log::warn!("{} {}: rejected path", req.method(), req.uri().path());
        return status_page(StatusCode::NOT_FOUND);
    };

    match tokio::fs::read(root.join(&rel)).await {
        Ok(contents) => {
            let body = if req.method() == Method::HEAD {
                Bytes::new()
            } else {
                Bytes::from(contents)
            };
            let mut response = Response::new(Full::new(body));
            if let Ok(value) = header::HeaderValue::from_str(content_type(&rel)) {
                response.headers_mut().insert(header::CONTENT_TYPE, value);
            }
            response
        }
        Err(err) => {
            log::warn!("{} {}: {}", req.method(), req.uri().path(), err);
            status_page(StatusCode::NOT_FOUND)
        }
    }
}

fn status_page(status: StatusCode) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(
        status.canonical_reason().unwrap_or("error").to_string(),
    )));
    *response.status_mut() = status;
    response
}

/// Map a request path to a relative file path under the root.
/// `/` becomes the page document; any non-normal component (`..`, prefixes,
/// another root) rejects the request.
fn resolve_request_path(uri_path: &str) -> Option<PathBuf> {
    let trimmed = uri_path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Some(PathBuf::from("index.html"));
    }

    let path = Path::new(trimmed);
    if path
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        Some(path.to_path_buf())
    } else {
        None
    }
}

/// Content type inferred from the file extension.
fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "text/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("mp3") => "audio/mpeg",
        Some("ogg") => "audio/ogg",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_index() {
        assert_eq!(
            resolve_request_path("/"),
            Some(PathBuf::from("index.html"))
        );
    }

    #[test]
    fn nested_asset_paths_resolve() {
        assert_eq!(
            resolve_request_path("/css/styles.css"),
            Some(PathBuf::from("css/styles.css"))
        );
    }

    #[test]
    fn traversal_is_rejected() {
        assert_eq!(resolve_request_path("/../Cargo.toml"), None);
        assert_eq!(resolve_request_path("/css/../../etc/passwd"), None);
    }

    #[test]
    fn content_types_by_extension() {
        assert_eq!(
            content_type(Path::new("index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(content_type(Path::new("css/styles.css")), "text/css");
        assert_eq!(content_type(Path::new("pkg/glimmer_web.js")), "text/javascript");
        assert_eq!(
            content_type(Path::new("pkg/glimmer_web_bg.wasm")),
            "application/wasm"
        );
        assert_eq!(content_type(Path::new("content.json")), "application/json");
        assert_eq!(
            content_type(Path::new("mystery.xyz")),
            "application/octet-stream"
        );
        assert_eq!(content_type(Path::new("no_extension")), "application/octet-stream");
    }

    #[tokio::test]
    async fn serves_files_and_404s_missing_ones() {
        let root = std::env::temp_dir().join("glimmer-server-test");
        let _ = std::fs::create_dir_all(&root);
        std::fs::write(root.join("index.html"), "<html></html>").unwrap();

        let ok = respond(&root, Request::builder().uri("/").body(()).unwrap()).await;
        assert_eq!(ok.status(), StatusCode::OK);
        assert_eq!(
            ok.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );

        let missing = respond(&root, Request::builder().uri("/nope.css").body(()).unwrap()).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_get_is_rejected() {
        let root = std::env::temp_dir();
        let req = Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(())
            .unwrap();
        let response = respond(&root, req).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
