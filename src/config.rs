/// Configuration constants for the qbee API
pub mod api {
    /// Base path for qbee API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Login endpoint
    pub const LOGIN: &str = "login";

    /// Stage a single configuration change
    pub const CHANGE: &str = "change";

    /// Bulk endpoint for all uncommitted changes
    pub const CHANGES: &str = "changes";

    /// List of uncommitted changes
    pub const CHANGELIST: &str = "changelist";

    /// Commit endpoint
    pub const COMMIT: &str = "commit";

    /// Active configuration endpoint
    pub const CONFIG: &str = "config";

    /// Group tree endpoint
    pub const GROUPTREE: &str = "grouptree";

    /// File manager listing endpoint
    pub const FILES: &str = "files";

    /// File manager single-file endpoint
    pub const FILE: &str = "file";

    /// Directory creation endpoint (relative to FILE)
    pub const CREATEDIR: &str = "createdir";

    /// Role endpoint
    pub const ROLE: &str = "role";

    /// Bootstrap key endpoint
    pub const BOOTSTRAP_KEY: &str = "bootstrapkey";

    /// Inventory endpoint
    pub const INVENTORY: &str = "inventory";

    /// Version written into every staged configuration change
    pub const CONFIG_VERSION: &str = "v1";

    /// Action value for the commit endpoint
    pub const COMMIT_ACTION: &str = "commit";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file path relative to the platform config dir
    pub const FILE_PATH: &str = "qbee/credentials.json";

    /// Environment variable holding the account email
    pub const USERNAME_ENV_VAR: &str = "QBEE_USERNAME";

    /// Environment variable holding the account password
    pub const PASSWORD_ENV_VAR: &str = "QBEE_PASSWORD";
}

/// Host configuration
pub mod host {
    /// Environment variable for the API host
    pub const ENV_VAR: &str = "QBEE_HOST";
}

/// Default values for CLI
pub mod defaults {
    /// Default qbee API host
    pub const HOST: &str = "www.app.qbee.io";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Prefix of generated commit messages
    pub const COMMIT_MESSAGE_PREFIX: &str = "qbeectl";
}
