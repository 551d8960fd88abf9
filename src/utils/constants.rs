// Claves de localStorage (compartidas con versiones anteriores del frontend)
pub const USER_STORAGE_KEY: &str = "user";
pub const TOKEN_STORAGE_KEY: &str = "authToken";
pub const LOGIN_TIMESTAMP_STORAGE_KEY: &str = "lastLoginTimestamp";

// Rutas del frontend
pub const LANDING_PATH: &str = "/";
pub const CALLBACK_PATH: &str = "/callback";
pub const HOME_PATH: &str = "/home";

// Endpoints del backend
pub const AUTH_GITHUB_ENDPOINT: &str = "/auth/github";
pub const AUTH_CALLBACK_ENDPOINT: &str = "/auth/callback";
pub const AUTH_USERINFO_ENDPOINT: &str = "/auth/userinfo";
pub const REVIEW_ANALYZE_ENDPOINT: &str = "/review/analyze";
pub const REVIEW_LANGUAGES_ENDPOINT: &str = "/review/supported-languages";
