//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The main router serves the built site from `site_root`, answers every
//! resolve alias through `DevConfig::resolve_alias`, merges plugin routes, and always
//! answers `/__hmr/config` so the page can find the reload socket. The socket
//! itself rides the main router only when it shares the serve port; a
//! separate hot-reload port gets its own router from `hmr_app`.

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::hmr;
use crate::plugins::DevPlugin;
use crate::state::DevState;

pub const HMR_PATH: &str = "/__hmr";
pub const HMR_CONFIG_PATH: &str = "/__hmr/config";

fn cors() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
}

fn hmr_routes(state: DevState, with_socket: bool) -> Router {
    let mut router = Router::new().route(HMR_CONFIG_PATH, get(hmr::hmr_config));
    if with_socket {
        router = router.route(HMR_PATH, get(hmr::handle_hmr));
    }
    router.with_state(state)
}

/// Main dev server router.
pub fn app(state: DevState, plugins: &[Box<dyn DevPlugin>]) -> Router {
    let config = state.config.clone();

    let mut aliases = Router::new();
    for name in config.resolve.alias.keys() {
        aliases = aliases.route(&format!("/{name}/{{*path}}"), get(serve_alias));
    }

    let mut router = Router::new()
        .route("/healthz", get(healthz))
        .merge(aliases.with_state(state.clone()))
        .merge(hmr_routes(state, config.hmr_shares_listener()));
    for plugin in plugins {
        router = router.merge(plugin.routes(&config));
    }

    let site = ServeDir::new(config.site_dir()).append_index_html_on_directories(true);
    router.fallback_service(site).layer(TraceLayer::new_for_http()).layer(cors())
}

/// Router for a hot-reload channel bound to its own port.
pub fn hmr_app(state: DevState) -> Router {
    hmr_routes(state, true).route("/healthz", get(healthz)).layer(cors())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Serve one file from an alias target. The file is served from its parent
/// directory so nothing outside the resolved path is reachable.
async fn serve_alias(State(state): State<DevState>, mut req: Request) -> Response {
    let Some(file) = state.config.resolve_alias(req.uri().path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(dir) = file.parent() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(uri) = req
        .uri()
        .path()
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .and_then(|name| Uri::try_from(format!("/{name}")).ok())
    else {
        return StatusCode::NOT_FOUND.into_response();
    };
    *req.uri_mut() = uri;

    match ServeDir::new(dir).try_call(req).await {
        Ok(resp) => resp.into_response(),
        Err(e) => {
            tracing::warn!(error = %e, path = %file.display(), "alias read failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
