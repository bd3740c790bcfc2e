/// Default API base URL when neither config nor CLI sets one
pub(crate) const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Storage key holding the bearer token
pub(crate) const TOKEN_KEY: &str = "token";

/// Storage key holding the last active tab id
pub(crate) const ACTIVE_TAB_KEY: &str = "activeTab";

/// Number of projects shown in the dashboard's recent list
pub(crate) const RECENT_LIMIT: usize = 3;

/// Directory name used under the config/home directories
pub(crate) const APP_DIR: &str = "projdash";
