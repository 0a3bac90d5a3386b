use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use tower::{
    util::{MapRequest, MapRequestLayer},
    Layer,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{dashboard, public};
use crate::middleware::{override_method, require_auth};
use crate::state::AppState;

/// Router wrapped with the method override, ready to serve
pub type AppService = MapRequest<Router, fn(Request) -> Request>;

/// Build the full service. The override runs before routing so
/// `POST ?_method=DELETE` reaches the DELETE route.
pub fn service(state: AppState) -> AppService {
    let rewrite: fn(Request) -> Request = override_method;
    MapRequestLayer::new(rewrite).layer(router(state))
}

pub fn router(state: AppState) -> Router {
    let config = state.config.clone();

    let mut app = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        // Protected
        .merge(dashboard_routes(state.clone()))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.security.enable_cors {
        app = app.layer(cors_layer(&config.security));
    }
    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app.with_state(state)
}

fn dashboard_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route(
            "/dashboard/item/:id",
            get(dashboard::view_note)
                .put(dashboard::update_note)
                .delete(dashboard::delete_note),
        )
        .route("/dashboard/add", get(dashboard::add_form).post(dashboard::add_submit))
        .route(
            "/dashboard/search",
            get(dashboard::search_page).post(dashboard::search_submit),
        )
        // route_layer keeps unknown paths as 404 instead of 401
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
