// ABOUTME: Config scaffolding for new workspaces.
// ABOUTME: Creates dockmate.yml template files.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::{CONFIG_FILENAME, ClientConfig, Endpoint};

/// Write a starter `dockmate.yml` into `dir` and return its path.
pub fn init_config(dir: &Path, server: Option<&str>, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let server = match server {
        Some(s) => Endpoint::parse(s).map_err(Error::InvalidConfig)?,
        None => ClientConfig::default().server,
    };

    std::fs::write(&config_path, generate_template_yaml(&server))?;

    Ok(config_path)
}

fn generate_template_yaml(server: &Endpoint) -> String {
    format!(
        r#"server: {server}
timeout: 30s
# Extra headers sent with every request. Values may come from the environment:
# headers:
#   x-token:
#     env: DOCKMATE_TOKEN
"#
    )
}
