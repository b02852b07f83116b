use async_trait::async_trait;

use crate::config::Config;
use crate::errors::PlanError;
use crate::profile::Profile;

pub mod groq;
pub mod mock;

/// Produces one raw plan text for a profile. Implementations never
/// panic across this boundary; live failures come back as a tagged
/// `PlanError` and the caller decides how to display them.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn request_plan(&self, profile: &Profile, debug: bool) -> Result<String, PlanError>;

    /// Label shown to the user for where the plan came from.
    fn source(&self) -> &'static str;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

/// Demo flag forces simulation; so does a missing API key.
pub fn make_provider(demo: bool, api_key: Option<String>, cfg: &Config) -> DynProvider {
    match api_key {
        Some(key) if !demo => Box::new(groq::GroqProvider::new(key, cfg)),
        _ => Box::new(mock::MockProvider::new()),
    }
}
