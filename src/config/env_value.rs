// ABOUTME: Extra request header values for the panel connection.
// ABOUTME: A header is either written inline or read from the environment at startup.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Value of one configured request header.
///
/// ```yaml
/// headers:
///   x-client: dockmate          # inline
///   x-token:
///     env: PANEL_TOKEN          # taken from the environment
///     default: anonymous        # used when PANEL_TOKEN is unset
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Literal(String),
    FromEnv {
        #[serde(rename = "env")]
        var: String,
        #[serde(default)]
        default: Option<String>,
    },
}

impl EnvValue {
    /// The header text, or `None` when the variable is unset and no default exists.
    pub fn resolve(&self) -> Option<String> {
        match self {
            EnvValue::Literal(text) => Some(text.clone()),
            EnvValue::FromEnv { var, default } => std::env::var(var).ok().or_else(|| default.clone()),
        }
    }
}

/// Resolve every configured header, ordered by name so the wire format is stable.
pub fn resolve_headers(headers: &HashMap<String, EnvValue>) -> Result<Vec<(String, String)>> {
    let mut resolved = Vec::with_capacity(headers.len());
    for (name, value) in headers {
        let text = value.resolve().ok_or_else(|| Error::MissingEnvVar {
            header: name.clone(),
            var: match value {
                EnvValue::FromEnv { var, .. } => var.clone(),
                EnvValue::Literal(_) => String::new(),
            },
        })?;
        resolved.push((name.clone(), text));
    }
    resolved.sort();
    Ok(resolved)
}
