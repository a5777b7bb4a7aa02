use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const API_BASE_PATH: &str = "/api/auction-sales";

pub const FILTERS_PATH: &str = "/filters";
pub const TRENDS_PATH: &str = "/trends";
pub const IMPORT_PATH: &str = "/import";

pub const DEFAULT_IMPORT_LIMIT: u32 = 50;
pub const DEFAULT_LIST_LIMIT: u32 = 100;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Line colors, assigned to series by position (index mod 8).
pub const PALETTE: [&str; 8] = [
    "#2563eb", "#dc2626", "#16a34a", "#d97706", "#7c3aed", "#0891b2", "#be185d", "#65a30d",
];

/// Join a base URL and an endpoint path under [`API_BASE_PATH`].
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}{}", base_url.trim_end_matches('/'), API_BASE_PATH, path)
}
