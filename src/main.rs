//! Trade Desk Backend Server
//!
//! REST API server for trade desk reference data.

use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use trade_desk_backend::api::create_router;
use trade_desk_backend::config::Config;
use trade_desk_backend::db::{DatabasePool, seed};
use trade_desk_backend::state::AppState;

use trade_desk_backend::error::{ErrorResponse, FieldError, ValidationErrorResponse};
use trade_desk_backend::models::{
    BidListRequest, BidListResponse, CreateUserRequest, CreatedResponse, CurvePointRequest,
    CurvePointResponse, HealthResponse, LoginRequest, LoginResponse, RatingRequest,
    RatingResponse, RuleNameRequest, RuleNameResponse, TradeRequest, TradeResponse,
    UpdateUserRequest, UserCreatedResponse, UserResponse,
};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        trade_desk_backend::api::health::health_check,
        trade_desk_backend::api::auth::login,
        trade_desk_backend::api::bids::list_bid_lists,
        trade_desk_backend::api::bids::get_bid_list,
        trade_desk_backend::api::bids::create_bid_list,
        trade_desk_backend::api::bids::update_bid_list,
        trade_desk_backend::api::bids::delete_bid_list,
        trade_desk_backend::api::curve_points::list_curve_points,
        trade_desk_backend::api::curve_points::get_curve_point,
        trade_desk_backend::api::curve_points::create_curve_point,
        trade_desk_backend::api::curve_points::update_curve_point,
        trade_desk_backend::api::curve_points::delete_curve_point,
        trade_desk_backend::api::ratings::list_ratings,
        trade_desk_backend::api::ratings::get_rating,
        trade_desk_backend::api::ratings::create_rating,
        trade_desk_backend::api::ratings::update_rating,
        trade_desk_backend::api::ratings::delete_rating,
        trade_desk_backend::api::rule_names::list_rule_names,
        trade_desk_backend::api::rule_names::get_rule_name,
        trade_desk_backend::api::rule_names::create_rule_name,
        trade_desk_backend::api::rule_names::update_rule_name,
        trade_desk_backend::api::rule_names::delete_rule_name,
        trade_desk_backend::api::trades::list_trades,
        trade_desk_backend::api::trades::get_trade,
        trade_desk_backend::api::trades::create_trade,
        trade_desk_backend::api::trades::update_trade,
        trade_desk_backend::api::trades::delete_trade,
        trade_desk_backend::api::users::list_users,
        trade_desk_backend::api::users::get_user,
        trade_desk_backend::api::users::create_user,
        trade_desk_backend::api::users::update_user,
        trade_desk_backend::api::users::delete_user,
    ),
    components(
        schemas(
            HealthResponse,
            LoginRequest,
            LoginResponse,
            CreatedResponse,
            ErrorResponse,
            FieldError,
            ValidationErrorResponse,
            BidListRequest,
            BidListResponse,
            CurvePointRequest,
            CurvePointResponse,
            RatingRequest,
            RatingResponse,
            RuleNameRequest,
            RuleNameResponse,
            TradeRequest,
            TradeResponse,
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            UserCreatedResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Auth", description = "Authentication"),
        (name = "BidList", description = "Bid list management"),
        (name = "CurvePoints", description = "Curve point management"),
        (name = "Ratings", description = "Rating management"),
        (name = "RuleNames", description = "Rule name management"),
        (name = "Trades", description = "Trade management"),
        (name = "Users", description = "Account management (Admin)"),
    ),
    info(
        title = "Trade Desk API",
        version = "0.1.0",
        description = "REST API for trade desk reference data",
        license(name = "MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration: an explicit CONFIG_PATH, a config.toml next to the
    // binary, or defaults plus environment overrides.
    let config = match std::env::var("CONFIG_PATH") {
        Ok(path) => Config::load(path)?,
        Err(_) if std::path::Path::new("config.toml").exists() => Config::load("config.toml")?,
        Err(_) => Config::from_env()?,
    };

    // Connect, migrate, seed
    let db = DatabasePool::new(&config.database).await?;
    db.run_migrations().await?;
    seed::run(db.pool(), &config.seed)
        .await
        .map_err(|e| anyhow::anyhow!("seeding failed: {}", e))?;

    // Create application state
    let state = Arc::new(AppState::new(&db, &config));

    info!(
        "Starting Trade Desk Backend on {}:{}",
        config.server.host, config.server.port
    );
    info!(
        "Swagger UI available at http://{}:{}/swagger-ui/",
        config.server.host, config.server.port
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
