use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub admin_email: String,
    pub admin_password: String,
    pub geocoder_url: String,
    pub geocoder_user_agent: String,
    pub geocoder_language: String,
    pub payment_url: String,
    pub mock_bookings: usize,
    pub mock_latency: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| "test@example.com".to_string()),
            admin_password: env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "password123".to_string()),
            geocoder_url: env::var("GEOCODER_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org/search".to_string()),
            geocoder_user_agent: env::var("GEOCODER_USER_AGENT")
                .unwrap_or_else(|_| "HotelManagementApp/1.0".to_string()),
            geocoder_language: env::var("GEOCODER_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
            payment_url: env::var("PAYMENT_URL")
                .unwrap_or_else(|_| "https://your-backend-api.com/mpesa-payment".to_string()),
            mock_bookings: env::var("MOCK_BOOKINGS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            mock_latency: Duration::from_millis(
                env::var("MOCK_LATENCY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1000),
            ),
        }
    }
}
