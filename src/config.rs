use anyhow::{Context, Result};
use clap::{Args, Parser};
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::outbound::storage::swift::MEMORY_REGION,
    app::{AppConfig, StateBackend, SwiftBackendKind, DEFAULT_TIMEOUT_SECS},
    domain::models::{AdapterSettings, Interface, ServiceSelector, UserCredentials, DEFAULT_TTL_SECONDS},
};

/// Adapter options shared by the server and the command line client
#[derive(Args, Debug, Clone)]
pub struct SwiftArgs {
    /// Container that holds the objects
    #[arg(long, env = "SWIFT_CONTAINER")]
    pub container: String,

    /// Catalog region of the object-store endpoint
    #[arg(long, env = "SWIFT_REGION", default_value = MEMORY_REGION)]
    pub region: String,

    /// Catalog service name of the object store
    #[arg(long, env = "SWIFT_SERVICE_NAME", default_value = "swift")]
    pub service_name: String,

    /// Catalog service type of the object store
    #[arg(long, env = "SWIFT_SERVICE_TYPE", default_value = "object-store")]
    pub service_type: String,

    /// Endpoint interface: public, internal or admin
    #[arg(long, env = "SWIFT_INTERFACE", default_value = "public")]
    pub interface: String,

    /// Backend user id
    #[arg(long, env = "SWIFT_USER_ID", conflicts_with = "user_name")]
    pub user_id: Option<String>,

    /// Backend user name, used together with the user domain
    #[arg(long, env = "SWIFT_USER_NAME", requires = "user_domain")]
    pub user_name: Option<String>,

    /// Domain of the backend user name
    #[arg(long, env = "SWIFT_USER_DOMAIN")]
    pub user_domain: Option<String>,

    /// Backend user password
    #[arg(long, env = "SWIFT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Identity v3 endpoint
    #[arg(long, env = "SWIFT_AUTH_URL")]
    pub auth_url: Option<String>,

    /// Project the token is scoped to
    #[arg(long, env = "SWIFT_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Object-store backend type: memory or keystone
    #[arg(long, env = "SWIFT_BACKEND", default_value = "memory")]
    pub swift_backend: String,

    /// State backend type: memory or sqlite
    #[arg(long, env = "STATE_BACKEND", default_value = "memory")]
    pub state_backend: String,

    /// Database URL for the sqlite state backend
    #[arg(long, env = "STATE_DATABASE_URL")]
    pub state_database_url: Option<String>,

    /// Default lifetime of generated URLs in seconds
    #[arg(long, env = "SWIFT_TEMP_URL_TTL", default_value_t = DEFAULT_TTL_SECONDS)]
    pub temp_url_ttl: u64,

    /// Request timeout for backend calls in seconds
    #[arg(long, env = "SWIFT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Adapter options read from the environment alone
#[derive(Parser, Debug)]
#[command(name = "swift-storage-adapter")]
struct EnvArgs {
    #[command(flatten)]
    swift: SwiftArgs,
}

impl SwiftArgs {
    /// Parse the options from `SWIFT_*` and `STATE_*` variables, ignoring argv
    pub fn from_env() -> Result<Self> {
        let args = EnvArgs::try_parse_from(["swift-storage-adapter"])
            .context("Invalid adapter environment")?;
        Ok(args.swift)
    }

    pub fn to_app_config(&self) -> Result<AppConfig> {
        let swift_backend = match self.swift_backend.as_str() {
            "memory" => SwiftBackendKind::InMemory,
            "keystone" => SwiftBackendKind::Keystone {
                auth_url: self
                    .auth_url
                    .clone()
                    .context("SWIFT_AUTH_URL is required for the keystone backend")?,
                project_id: self.project_id.clone(),
                timeout: Duration::from_secs(self.timeout_secs),
            },
            _ => anyhow::bail!("Unknown Swift backend: {}", self.swift_backend),
        };

        let state_backend = match self.state_backend.as_str() {
            "memory" => StateBackend::InMemory,
            "sqlite" => StateBackend::Sqlite {
                url: self
                    .state_database_url
                    .clone()
                    .context("STATE_DATABASE_URL is required for the sqlite state backend")?,
            },
            _ => anyhow::bail!("Unknown state backend: {}", self.state_backend),
        };

        let user = self.credentials(&swift_backend)?;
        let settings = AdapterSettings::new(self.container.clone(), self.region.clone(), user)
            .context("Invalid adapter settings")?
            .with_default_ttl(self.temp_url_ttl)
            .context("Invalid SWIFT_TEMP_URL_TTL")?
            .with_service(self.service_selector()?);

        Ok(AppConfig {
            settings,
            swift_backend,
            state_backend,
        })
    }

    fn service_selector(&self) -> Result<ServiceSelector> {
        Ok(ServiceSelector {
            name: self.service_name.clone(),
            service_type: self.service_type.clone(),
            interface: self
                .interface
                .parse::<Interface>()
                .context("Invalid SWIFT_INTERFACE")?,
        })
    }

    fn credentials(&self, backend: &SwiftBackendKind) -> Result<UserCredentials> {
        let password = self.password.clone();
        let user = match (&self.user_id, &self.user_name) {
            (Some(id), _) => UserCredentials::by_id(
                id.clone(),
                password.context("SWIFT_PASSWORD is required")?,
            )?,
            (None, Some(name)) => UserCredentials::by_name(
                name.clone(),
                self.user_domain.clone().unwrap_or_default(),
                password.context("SWIFT_PASSWORD is required")?,
            )?,
            (None, None) if matches!(backend, SwiftBackendKind::InMemory) => {
                UserCredentials::by_id("memory", "memory")?
            }
            (None, None) => anyhow::bail!("SWIFT_USER_ID or SWIFT_USER_NAME is required"),
        };
        Ok(user)
    }
}

/// Install the fmt subscriber at the given level; unknown levels fall back to info
pub fn init_logging(log_level: &str) {
    let level = log_level.parse::<Level>().unwrap_or(Level::INFO);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
}
