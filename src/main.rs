use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, patch, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use travel_nest_api::auth::TokenCodec;
use travel_nest_api::config;
use travel_nest_api::database::Store;
use travel_nest_api::handlers::{elevated, protected, public};
use travel_nest_api::middleware::{require_admin, require_host, session_guard};
use travel_nest_api::services::payments::PaymentClient;
use travel_nest_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up MONGODB_URI, ACCESS_TOKEN_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Travel Nest API in {:?} mode", config.environment);

    let store = Store::connect(&config.database).await?;
    let tokens = TokenCodec::from_config(&config.security)?;
    let payments = PaymentClient::new(&config.payment);
    let state = AppState {
        store,
        tokens,
        payments,
    };

    let app = app(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Travel Nest API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        .merge(session_routes(&state))
        .merge(host_routes(&state))
        .merge(admin_routes(&state))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(public::session::token_post))
        .route("/logout", get(public::session::logout_get))
        .route("/rooms", get(public::rooms::rooms_list))
        .route("/users/:email", put(public::users::user_save_put))
}

fn session_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/user/:email", get(protected::users::user_get))
        .route("/users/update/:email", put(protected::users::user_update_put))
        .route("/room/:id", get(protected::rooms::room_get))
        .route("/rooms/:email", get(protected::rooms::rooms_by_host))
        .route("/add-room", post(protected::rooms::room_post))
        .route("/rooms/status/:id", patch(protected::rooms::room_status_patch))
        .route(
            "/bookings",
            get(protected::bookings::bookings_get).post(protected::bookings::booking_post),
        )
        .route(
            "/create-payment-intent",
            post(protected::payments::payment_intent_post),
        )
        .route_layer(from_fn_with_state(state.clone(), session_guard))
}

fn host_routes(state: &AppState) -> Router<AppState> {
    // Layers run outermost-last-added: session guard first, then role guard
    Router::new()
        .route("/bookings/host", get(elevated::bookings::host_bookings_get))
        .route_layer(from_fn_with_state(state.clone(), require_host))
        .route_layer(from_fn_with_state(state.clone(), session_guard))
}

fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(elevated::users::users_list))
        .route("/admin-stat", get(elevated::stats::admin_stat_get))
        .route_layer(from_fn_with_state(state.clone(), require_admin))
        .route_layer(from_fn_with_state(state.clone(), session_guard))
}

fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = config::config()
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Travel Nest API",
            "version": version,
            "description": "Booking platform backend built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "session": "/jwt, /logout (public - cookie management)",
                "catalog": "/rooms (public)",
                "rooms": "/room/:id, /rooms/:email, /add-room, /rooms/status/:id (guarded)",
                "bookings": "/bookings (guarded), /bookings/host (guarded, host)",
                "users": "/user/:email, /users/update/:email (guarded), /users/:email (public save)",
                "admin": "/users, /admin-stat (guarded, admin)",
                "payments": "/create-payment-intent (guarded)",
            }
        }
    }))
}

async fn health(
    axum::extract::State(store): axum::extract::State<Store>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match store.ping().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
