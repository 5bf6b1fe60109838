//! Console-wide constants and environment resolution.

/// Minimum trimmed length for a search query.
pub const MIN_QUERY_LEN: usize = 4;
/// Notification lifetime in milliseconds.
pub const NOTIFICATION_TTL_MS: u32 = 2_500;
/// Local storage key overriding the API base URL.
pub const API_BASE_OVERRIDE_KEY: &str = "cifdesk.api_base";
/// Local storage key holding the persisted session.
pub const SESSION_STORAGE_KEY: &str = "cifdesk.session";
/// Local storage key holding the sidebar preference.
pub const SIDEBAR_STORAGE_KEY: &str = "cifdesk.sidebar_expanded";

const DEV_UI_PORT: &str = "8080";
const DEV_API_PORT: &str = "3000";

/// Rows-per-page choices offered by every table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    /// Ten rows.
    #[default]
    Ten,
    /// Twenty rows.
    Twenty,
    /// Fifty rows.
    Fifty,
}

impl PageSize {
    /// All selectable sizes, in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Ten, Self::Twenty, Self::Fifty]
    }

    /// Number of rows per page.
    #[must_use]
    pub const fn rows(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }

    /// Parse a `<select>` value; anything outside 10/20/50 is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().parse::<usize>().ok()? {
            10 => Some(Self::Ten),
            20 => Some(Self::Twenty),
            50 => Some(Self::Fifty),
            _ => None,
        }
    }
}

/// Derive the API base from the page location.
///
/// The dev server on port 8080 talks to the API on port 3000; any other
/// origin is assumed to proxy `/api` itself.
#[must_use]
pub fn resolve_api_base(protocol: &str, host: &str, port: &str) -> String {
    let protocol = protocol.trim_end_matches(':');
    match port {
        "" => format!("{protocol}://{host}"),
        DEV_UI_PORT => format!("{protocol}://{host}:{DEV_API_PORT}"),
        other => format!("{protocol}://{host}:{other}"),
    }
}

/// Validate a user-supplied API base override.
#[must_use]
pub fn normalize_api_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    (has_scheme && trimmed.len() > "https://".len()).then(|| trimmed.to_string())
}
