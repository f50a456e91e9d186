use crate::config::{url_override, Config, URL_ENV_VAR};
use anyhow::Result;

/// Render the effective configuration, password masked
#[must_use]
pub fn render_config(config: &Config) -> String {
    let database = &config.database;
    let mut lines = vec![
        "📋 shopdb configuration".to_string(),
        format!("   URL:                      {}", database.redacted_url()),
    ];
    if let Some(app_name) = &database.app_name {
        lines.push(format!("   App name:                 {app_name}"));
    }
    if let Some(ms) = database.server_selection_timeout_ms {
        lines.push(format!("   Server selection timeout: {ms}ms"));
    }
    if let Some(ms) = database.connect_timeout_ms {
        lines.push(format!("   Connect timeout:          {ms}ms"));
    }
    lines.join("\n")
}

/// Handle the config command
#[allow(clippy::disallowed_methods, clippy::unnecessary_wraps)]
pub fn handle_show_config(config: &Config) -> Result<()> {
    println!("{}", render_config(config));
    if url_override().is_some() {
        println!("   (URL taken from {URL_ENV_VAR})");
    }
    Ok(())
}
