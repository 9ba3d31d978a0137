//! Account credential resolution from multiple sources

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{QbeeError, Result};

/// Account credentials used for the login call
#[derive(Serialize, Deserialize, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credential resolution with fallback logic
pub struct CredentialsResolver {
    /// Override for the credentials file location
    file_override: Option<PathBuf>,
}

impl CredentialsResolver {
    pub fn new() -> Self {
        Self {
            file_override: None,
        }
    }

    /// Use a specific credentials file instead of the platform default
    pub fn with_file(path: &Path) -> Self {
        Self {
            file_override: Some(path.to_path_buf()),
        }
    }

    /// Resolve credentials with fallback:
    /// 1. CLI arguments (both must be provided)
    /// 2. Environment variables (QBEE_USERNAME, QBEE_PASSWORD)
    /// 3. Credentials file (<config dir>/qbee/credentials.json)
    pub fn resolve(
        &self,
        cli_username: Option<&str>,
        cli_password: Option<&str>,
    ) -> Result<Credentials> {
        if let (Some(username), Some(password)) = (cli_username, cli_password) {
            debug!("Using credentials from CLI arguments");
            return Ok(Credentials::new(username, password));
        }

        if let (Ok(username), Ok(password)) = (
            std::env::var(credentials::USERNAME_ENV_VAR),
            std::env::var(credentials::PASSWORD_ENV_VAR),
        ) {
            debug!(
                "Using credentials from {} / {} environment variables",
                credentials::USERNAME_ENV_VAR,
                credentials::PASSWORD_ENV_VAR
            );
            return Ok(Credentials::new(&username, &password));
        }

        debug!("No credentials in CLI arguments or environment, trying credentials file");
        self.read_from_credentials_file()
    }

    fn read_from_credentials_file(&self) -> Result<Credentials> {
        let path = self
            .credentials_path()
            .ok_or_else(|| QbeeError::CredentialsNotFound(Self::not_found_message(None)))?;

        debug!("Looking for credentials file at: {}", path.display());

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                return Err(QbeeError::CredentialsNotFound(Self::not_found_message(
                    Some(&path),
                )));
            }
        };

        let creds: Credentials = serde_json::from_str(&content).map_err(|e| {
            QbeeError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!("Using credentials from file {}", path.display());
        Ok(creds)
    }

    fn credentials_path(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.file_override {
            return Some(path.clone());
        }
        dirs::config_dir().map(|p| p.join(credentials::FILE_PATH))
    }

    fn not_found_message(path: Option<&Path>) -> String {
        let file_info = path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No qbee credentials found. Please provide them using one of:\n\
             \n\
             1. CLI arguments:     qbeectl --username <EMAIL> --password <PASSWORD>\n\
             2. Environment vars:  export {}=<EMAIL> {}=<PASSWORD>\n\
             3. Credentials file:  {{\"email\": \"...\", \"password\": \"...\"}}\n\
             \n\
             Checked: CLI arguments, environment{}",
            credentials::USERNAME_ENV_VAR,
            credentials::PASSWORD_ENV_VAR,
            file_info
        )
    }
}

impl Default for CredentialsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_credentials_take_precedence() {
        let resolver = CredentialsResolver::new();
        let creds = resolver
            .resolve(Some("user@example.com"), Some("secret"))
            .unwrap();
        assert_eq!(creds.email, "user@example.com");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn test_credentials_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"email": "file@example.com", "password": "from-file"}}"#
        )
        .unwrap();

        let resolver = CredentialsResolver::with_file(file.path());
        let creds = resolver.read_from_credentials_file().unwrap();
        assert_eq!(creds.email, "file@example.com");
        assert_eq!(creds.password, "from-file");
    }

    #[test]
    fn test_credentials_file_missing() {
        let resolver = CredentialsResolver::with_file(Path::new("/nonexistent/qbee/creds.json"));
        let err = resolver.read_from_credentials_file().unwrap_err();
        assert!(matches!(err, QbeeError::CredentialsNotFound(_)));
        assert!(err.to_string().contains("/nonexistent/qbee/creds.json"));
    }

    #[test]
    fn test_credentials_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let resolver = CredentialsResolver::with_file(file.path());
        let err = resolver.read_from_credentials_file().unwrap_err();
        assert!(matches!(err, QbeeError::Credentials(_)));
    }

    #[test]
    fn test_not_found_message_format() {
        let msg = CredentialsResolver::not_found_message(None);
        assert!(msg.contains("QBEE_USERNAME"));
        assert!(msg.contains("QBEE_PASSWORD"));
        assert!(msg.contains("--username"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("user@example.com", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("hunter2"));
    }
}
