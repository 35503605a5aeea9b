//! Static delivery layer: serves the `site/` directory over HTTP.
//!
//! One logical route — `GET /` returns the page document; every other path
//! is resolved under the document root and served verbatim. No query
//! handling, no auth, no state. Runs until killed.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

mod files;

/// Fixed listening port.
const PORT: u16 = 3000;
/// Document root, relative to the working directory.
const DOC_ROOT: &str = "site";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let root = PathBuf::from(DOC_ROOT);
    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let listener = TcpListener::bind(addr).await?;
    log::info!(
        "serving {} on http://localhost:{}",
        root.display(),
        PORT
    );

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let root = root.clone();

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let root = root.clone();
                async move { Ok::<_, Infallible>(files::respond(&root, req).await) }
            });
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                log::warn!("connection error: {err}");
            }
        });
    }
}
