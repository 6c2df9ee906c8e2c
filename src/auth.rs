use std::future::Future;
use tracing::{info, warn};
use crate::config::AuthConfig;
use crate::error::DashboardError;

pub trait IdentityProvider {
    fn is_authenticated(&self) -> bool;

    /// Runs the interactive login and reports whether it succeeded.
    fn login(&mut self) -> impl Future<Output = Result<bool, DashboardError>> + Send;
}

/// Used when authentication is disabled: always signed in.
#[derive(Debug, Default)]
pub struct NoAuth;

impl IdentityProvider for NoAuth {
    fn is_authenticated(&self) -> bool {
        true
    }

    async fn login(&mut self) -> Result<bool, DashboardError> {
        Ok(true)
    }
}

/// Treats a token found in an environment variable as a completed login.
#[derive(Debug)]
pub struct EnvTokenProvider {
    variable: String,
    token: Option<String>
}

impl EnvTokenProvider {
    pub fn new(variable: &str) -> Self {
        EnvTokenProvider {
            variable: variable.to_string(),
            token: read_token(variable)
        }
    }
}

fn read_token(variable: &str) -> Option<String> {
    std::env::var(variable).ok().filter(|t| !t.trim().is_empty())
}

impl IdentityProvider for EnvTokenProvider {
    fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    async fn login(&mut self) -> Result<bool, DashboardError> {
        self.token = read_token(&self.variable);

        if self.token.is_some() {
            info!("Signed in using {}", self.variable);
            Ok(true)
        } else {
            warn!("Login failed: {} is not set", self.variable);
            Ok(false)
        }
    }
}

/// Provider selected by the `[auth]` section.
#[derive(Debug)]
pub enum ConfiguredProvider {
    Disabled(NoAuth),
    EnvToken(EnvTokenProvider)
}

impl ConfiguredProvider {
    pub fn from_config(config: &AuthConfig) -> Self {
        if config.enabled {
            ConfiguredProvider::EnvToken(EnvTokenProvider::new(&config.token_env))
        } else {
            ConfiguredProvider::Disabled(NoAuth)
        }
    }
}

impl IdentityProvider for ConfiguredProvider {
    fn is_authenticated(&self) -> bool {
        match self {
            ConfiguredProvider::Disabled(provider) => provider.is_authenticated(),
            ConfiguredProvider::EnvToken(provider) => provider.is_authenticated()
        }
    }

    async fn login(&mut self) -> Result<bool, DashboardError> {
        match self {
            ConfiguredProvider::Disabled(provider) => provider.login().await,
            ConfiguredProvider::EnvToken(provider) => provider.login().await
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    SignIn,
    Dashboard
}

pub struct AuthGate<P: IdentityProvider> {
    provider: P
}

impl<P: IdentityProvider> AuthGate<P> {
    pub fn new(provider: P) -> Self {
        AuthGate { provider }
    }

    pub fn view(&self) -> GateView {
        if self.provider.is_authenticated() { GateView::Dashboard } else { GateView::SignIn }
    }

    pub async fn login(&mut self) -> Result<GateView, DashboardError> {
        self.provider.login().await?;
        Ok(self.view())
    }

    /// Errors unless the dashboard may be shown.
    pub fn require(&self) -> Result<(), DashboardError> {
        match self.view() {
            GateView::Dashboard => Ok(()),
            GateView::SignIn => Err(DashboardError::auth("Sign in required, run `login` first".to_string()))
        }
    }
}
