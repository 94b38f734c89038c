use std::sync::{Arc, Mutex};

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use easystay::config::AppConfig;
use easystay::handlers;
use easystay::models::car::seed_cars;
use easystay::models::hotel::seed_hotels;
use easystay::services::auth::{SessionRegistry, StaticCredentials};
use easystay::services::bookings::generator::MockBookingSource;
use easystay::services::bookings::BookingStore;
use easystay::services::crud::CrudPanel;
use easystay::services::geocoding::nominatim::NominatimGeocoder;
use easystay::services::payments::mpesa::MpesaGateway;
use easystay::state::AppState;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if config.admin_password == "password123" {
        tracing::warn!("using the default admin password; set ADMIN_PASSWORD");
    }

    let geocoder = NominatimGeocoder::new(
        config.geocoder_url.clone(),
        config.geocoder_user_agent.clone(),
        config.geocoder_language.clone(),
    );
    tracing::info!("using geocoder at {}", config.geocoder_url);
    let payments = MpesaGateway::new(config.payment_url.clone());
    tracing::info!("using M-Pesa endpoint at {}", config.payment_url);

    let state = Arc::new(AppState {
        bookings: Arc::new(BookingStore::new()),
        booking_source: Arc::new(MockBookingSource::new(config.mock_bookings)),
        loader: Mutex::new(None),
        cars: Mutex::new(CrudPanel::new(seed_cars())),
        hotels: Mutex::new(CrudPanel::new(seed_hotels())),
        auth: Box::new(StaticCredentials::new(
            config.admin_email.clone(),
            config.admin_password.clone(),
        )),
        sessions: SessionRegistry::new(),
        geocoder: Box::new(geocoder),
        payments: Box::new(payments),
        config: config.clone(),
    });

    state.reload_bookings();

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/login", post(handlers::auth::login))
        .route("/api/logout", post(handlers::auth::logout))
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route("/api/bookings/stats", get(handlers::bookings::booking_stats))
        .route("/api/bookings/export", get(handlers::bookings::export_bookings))
        .route("/api/bookings/reload", post(handlers::bookings::reload_bookings))
        .route(
            "/api/cars",
            get(handlers::cars::list_cars).post(handlers::cars::create_car),
        )
        .route(
            "/api/cars/:id",
            put(handlers::cars::update_car).delete(handlers::cars::delete_car),
        )
        .route(
            "/api/hotels",
            get(handlers::hotels::list_hotels).post(handlers::hotels::create_hotel),
        )
        .route(
            "/api/hotels/:id",
            put(handlers::hotels::update_hotel).delete(handlers::hotels::delete_hotel),
        )
        .route("/api/geocode", get(handlers::hotels::geocode))
        .route("/api/payments/mpesa", post(handlers::payments::mpesa_payment))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.shutdown();
    tracing::info!("server stopped");

    Ok(())
}
