pub mod env {
    pub const ENVIRONMENT_ENV_VAR: &str = "KEYRELAY_ENVIRONMENT";
    pub const ENV_PREFIX: &str = "KEYRELAY";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const CONFIGURATION_DIR: &str = "configuration";
pub const DEFAULT_ENVIRONMENT: &str = "local";

pub mod auth0 {
    use std::time::Duration;

    pub const TOKEN_PATH: &str = "oauth/token";
    pub const USERS_BY_EMAIL_PATH: &str = "api/v2/users-by-email";
    pub const USERS_PATH: &str = "api/v2/users";
    pub const CHANGE_PASSWORD_PATH: &str = "dbconnections/change_password";
    pub const MANAGEMENT_AUDIENCE_PATH: &str = "api/v2/";

    /// Cached management tokens are refreshed this long before they expire.
    pub const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);
}

pub mod prod {
    pub const TIMEOUT_MILLIS: u64 = 10_000;
}

pub mod test {
    use std::time::Duration;

    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const TIMEOUT: Duration = Duration::from_millis(200);
}
