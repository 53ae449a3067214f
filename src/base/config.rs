//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use anyhow::Context;
use serde::Deserialize;
use tracing::info;

use super::types::Res;

/// Configuration for the faq-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared inner configuration.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// The configuration values themselves.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Supabase project base URL (`SUPABASE_URL`).
    pub supabase_url: String,
    /// Supabase service API key (`SUPABASE_KEY`).
    pub supabase_key: String,
    /// Telegram bot token (`BOT_TOKEN`).
    pub bot_token: String,
}

impl Config {
    /// Loads configuration from the process environment, optionally layered
    /// with a TOML file.
    ///
    /// All three secrets are required. Loading fails here, before any
    /// connection is attempted, if one is missing or empty.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        Self::load_from(config::Environment::default(), explicit_path)
    }

    fn load_from(env: config::Environment, explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(env);

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(
                cfg.build()?
                    .try_deserialize()
                    .context("SUPABASE_URL, SUPABASE_KEY, and BOT_TOKEN must all be set")?,
            ),
        };

        if result.supabase_url.is_empty() {
            return Err(anyhow::anyhow!("SUPABASE_URL must not be empty."));
        }

        if result.supabase_key.is_empty() {
            return Err(anyhow::anyhow!("SUPABASE_KEY must not be empty."));
        }

        if result.bot_token.is_empty() {
            return Err(anyhow::anyhow!("BOT_TOKEN must not be empty."));
        }

        // The values themselves are secrets and never make it into the logs.
        info!("Environment configuration loaded successfully.");

        Ok(result)
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    fn env_source(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<config::Map<_, _>>();

        config::Environment::default().source(Some(map))
    }

    #[test]
    fn loads_when_all_variables_are_present() {
        let source = env_source(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_KEY", "service-key"),
            ("BOT_TOKEN", "123456789:test-token"),
        ]);

        let config = Config::load_from(source, None).unwrap();

        assert_eq!(config.supabase_url, "https://project.supabase.co");
        assert_eq!(config.supabase_key, "service-key");
        assert_eq!(config.bot_token, "123456789:test-token");
    }

    #[test]
    fn fails_when_a_variable_is_missing() {
        let source = env_source(&[("SUPABASE_URL", "https://project.supabase.co"), ("SUPABASE_KEY", "service-key")]);

        let error = Config::load_from(source, None).unwrap_err();

        assert!(error.to_string().contains("BOT_TOKEN"));
    }

    #[test]
    fn fails_when_a_variable_is_empty() {
        let source = env_source(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_KEY", ""),
            ("BOT_TOKEN", "123456789:test-token"),
        ]);

        let error = Config::load_from(source, None).unwrap_err();

        assert!(error.to_string().contains("SUPABASE_KEY"));
    }
}
