use std::{net::SocketAddr, path::PathBuf};

use anyhow::{bail, Context};

use crate::activities::SignupPolicy;

/// Process configuration, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cors: bool,
    /// Replaces the built-in activities when set.
    pub activities_file: Option<PathBuf>,
    pub policy: SignupPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8000,
            cors: false,
            activities_file: None,
            policy: SignupPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT={port:?} is not a port number"))?,
            None => defaults.port,
        };

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port,
            cors: flag(&var, "CORS")?.unwrap_or(defaults.cors),
            activities_file: var("ACTIVITIES_FILE").filter(|p| !p.is_empty()).map(PathBuf::from),
            policy: SignupPolicy {
                enforce_capacity: flag(&var, "ENFORCE_CAPACITY")?.unwrap_or(false),
                strict_email: flag(&var, "STRICT_EMAIL")?.unwrap_or(false),
            },
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("bad listen address {}:{}", self.host, self.port))
    }
}

fn flag(var: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<bool>> {
    let Some(value) = var(key) else {
        return Ok(None);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => bail!("{key}={value:?} is not a boolean"),
    }
}
