//! Gateway configuration loaded from environment variables.
//!
//! Server settings:
//! - `HOST`: bind address (default: `"0.0.0.0"`)
//! - `PORTAL`: `customer`, `vendor`, `employee` or `all` (default: `all`)
//! - `CUSTOMER_PORT` / `VENDOR_PORT` / `EMPLOYEE_PORT` (defaults: 3001 / 3000 / 3002)
//! - `RUST_LOG`: tracing filter directive (default: `"info"`)
//! - `LOG_FORMAT`: `json` for JSON log lines, anything else for plain text
//!
//! SAP settings, one set per portal prefix (`CUSTOMER_`, `VENDOR_`, `EMPLOYEE_`):
//! - `<P>_SAP_URL` (required): SOAP base URL or OData service root
//! - `<P>_SAP_USER` / `<P>_SAP_PASSWORD` (required): Basic Auth credentials
//! - `<P>_SAP_CLIENT`: SAP client number sent as `sap-client`
//! - `<P>_SAP_INSECURE_TLS`: `true` to accept self-signed certificates
//! - `<P>_SAP_MAX_CONCURRENCY`: cap on in-flight SAP calls (unset or `0` is unbounded)

use std::fmt;
use std::str::FromStr;

use sap_client::{Credentials, SapEndpoint};
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(String),

    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// One of the three portal gateways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Portal {
    Customer,
    Vendor,
    Employee,
}

impl Portal {
    pub const ALL: [Portal; 3] = [Portal::Customer, Portal::Vendor, Portal::Employee];

    pub fn as_str(&self) -> &'static str {
        match self {
            Portal::Customer => "customer",
            Portal::Vendor => "vendor",
            Portal::Employee => "employee",
        }
    }

    fn env_prefix(&self) -> &'static str {
        match self {
            Portal::Customer => "CUSTOMER",
            Portal::Vendor => "VENDOR",
            Portal::Employee => "EMPLOYEE",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Portal::Customer => 3001,
            Portal::Vendor => 3000,
            Portal::Employee => 3002,
        }
    }
}

impl fmt::Display for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which gateways this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortalSelection {
    Only(Portal),
    #[default]
    All,
}

impl PortalSelection {
    pub fn portals(&self) -> Vec<Portal> {
        match self {
            PortalSelection::Only(portal) => vec![*portal],
            PortalSelection::All => Portal::ALL.to_vec(),
        }
    }
}

impl FromStr for PortalSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "customer" => Ok(PortalSelection::Only(Portal::Customer)),
            "vendor" => Ok(PortalSelection::Only(Portal::Vendor)),
            "employee" => Ok(PortalSelection::Only(Portal::Employee)),
            "all" | "" => Ok(PortalSelection::All),
            other => Err(format!(
                "expected customer, vendor, employee or all, got {other}"
            )),
        }
    }
}

/// A gateway to start: which portal, where to listen, which SAP system to call.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub portal: Portal,
    pub port: u16,
    pub sap: SapEndpoint,
}

/// Server configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub gateways: Vec<GatewayConfig>,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(&lookup);
        let selection: PortalSelection = env.parse_or("PORTAL", PortalSelection::All)?;

        let gateways = selection
            .portals()
            .into_iter()
            .map(|portal| env.gateway(portal))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host: env.get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            gateways,
        })
    }

    /// Returns the `"host:port"` bind address for `gateway`.
    pub fn addr(&self, gateway: &GatewayConfig) -> String {
        format!("{}:{}", self.host, gateway.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            gateways: Vec::new(),
        }
    }
}

/// Logging settings, read before anything else so startup errors are logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            json: lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

struct Env<'a, F>(&'a F);

impl<F> Env<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Value of `key`, treating blank values as unset.
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    fn require(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::Missing(key.to_string()))
    }

    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                key: key.to_string(),
                reason: e.to_string(),
                value,
            }),
        }
    }

    fn flag(&self, key: &str) -> Result<bool, ConfigError> {
        match self.get(key) {
            None => Ok(false),
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::Invalid {
                    key: key.to_string(),
                    value,
                    reason: "expected true or false".to_string(),
                }),
            },
        }
    }

    fn gateway(&self, portal: Portal) -> Result<GatewayConfig, ConfigError> {
        let prefix = portal.env_prefix();
        let key = |suffix: &str| format!("{prefix}_{suffix}");

        let port = self.parse_or(&key("PORT"), portal.default_port())?;
        let url = self.require(&key("SAP_URL"))?;
        let credentials = Credentials::new(
            self.require(&key("SAP_USER"))?,
            self.require(&key("SAP_PASSWORD"))?,
        );
        let max_concurrency: usize = self.parse_or(&key("SAP_MAX_CONCURRENCY"), 0)?;

        let mut sap = SapEndpoint::new(url, credentials)
            .accept_invalid_certs(self.flag(&key("SAP_INSECURE_TLS"))?)
            .max_concurrency(Some(max_concurrency));
        if let Some(client) = self.get(&key("SAP_CLIENT")) {
            sap = sap.with_client(client.trim());
        }

        Ok(GatewayConfig { portal, port, sap })
    }
}
