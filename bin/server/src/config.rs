//! Centralized server configuration.
//!
//! Strongly-typed configuration loaded via the `config` crate from
//! environment variables (separator `__`, e.g. `AUTH__PUBLIC_KEY_PATH`).
//!
//! The verification public key is environment-level configuration: its
//! absence is a fatal startup error for the edge guard, never a
//! per-request condition. The route tables are configuration data too,
//! not computed.

use hearth_access::RouteTable;
use serde::Deserialize;

/// Server configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address the server listens on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Authentication configuration.
    pub auth: AuthConfig,

    /// Route classification tables.
    #[serde(default)]
    pub routes: RouteConfig,

    /// Profile backend configuration.
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Edge-guard authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Path to the RSA public key (PEM) used to verify session tokens.
    pub public_key_path: String,

    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Role tag required by admin-only routes.
    #[serde(default = "default_admin_role")]
    pub admin_role: String,
}

/// Static route prefix lists.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteConfig {
    /// Path prefixes requiring a valid session.
    #[serde(default = "default_protected_prefixes")]
    pub protected: Vec<String>,

    /// Path prefixes additionally requiring the admin role.
    #[serde(default = "default_admin_prefixes")]
    pub admin_only: Vec<String>,
}

impl RouteConfig {
    /// Builds the route table used by the edge guard.
    #[must_use]
    pub fn to_table(&self) -> RouteTable {
        RouteTable::new(self.protected.clone(), self.admin_only.clone())
    }
}

/// Profile backend endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the REST backend serving `GET /profile`.
    #[serde(default = "default_backend_base_url")]
    pub base_url: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_admin_role() -> String {
    "family-admin".to_string()
}

fn default_protected_prefixes() -> Vec<String> {
    [
        "/home",
        "/settings",
        "/family",
        "/create-family",
        "/invitation-pending",
        "/invitation-rejected",
    ]
    .map(String::from)
    .to_vec()
}

fn default_admin_prefixes() -> Vec<String> {
    vec!["/admin".to_string()]
}

fn default_backend_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            protected: default_protected_prefixes(),
            admin_only: default_admin_prefixes(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_base_url(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
