use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::{any, get},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::HostConfig;

/// Pages hosted by the upstream service, reached by full-page navigation.
pub const UPSTREAM_PAGES: [&str; 3] = ["/sign-in", "/sign-up", "/generate"];

pub struct Upstream {
    base: String,
    client: reqwest::Client,
}

impl Upstream {
    pub fn new(base: &str) -> Self {
        let client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_default();
        Self {
            base: base.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url_for(&self, uri: &Uri) -> String {
        let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or_else(|| uri.path());
        format!("{}{}", self.base, path)
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}

async fn api_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Relays an `/api/*` request to the upstream and streams its answer back unchanged.
async fn proxy_api(
    State(upstream): State<Arc<Upstream>>,
    method: Method,
    uri: Uri,
    mut headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream.url_for(&uri);
    headers.remove(header::HOST);
    let reply = match upstream
        .client
        .request(method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Upstream request to {} failed: {}", url, e);
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = reply.status();
    let mut reply_headers = reply.headers().clone();
    reply_headers.remove(header::TRANSFER_ENCODING);
    reply_headers.remove(header::CONNECTION);
    match reply.bytes().await {
        Ok(bytes) => (status, reply_headers, bytes).into_response(),
        Err(e) => {
            tracing::error!("Reading upstream reply from {} failed: {}", url, e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

async fn redirect_page(State(upstream): State<Arc<Upstream>>, uri: Uri) -> Redirect {
    Redirect::temporary(&upstream.url_for(&uri))
}

fn upstream_routes(upstream: Arc<Upstream>) -> Router {
    UPSTREAM_PAGES
        .iter()
        .fold(Router::new(), |router, page| router.route(page, get(redirect_page)))
        .route("/api/{*path}", any(proxy_api))
        .with_state(upstream)
}

/// Router serving the compiled landing page with SPA fallback to `index.html`.
///
/// With an upstream configured, `/api/*` is proxied to it and the hosted auth
/// pages redirect there. Without one, `/api/*` answers 404 instead of the page.
pub fn app(config: &HostConfig) -> Router {
    let bundle = ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()));
    let forwarded = match config.upstream_url.as_deref() {
        Some(base) => upstream_routes(Arc::new(Upstream::new(base))),
        None => Router::new().route("/api/{*path}", any(api_not_found)),
    };

    Router::new()
        .route("/api/health", get(health_check))
        .merge(forwarded)
        .fallback_service(bundle)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
