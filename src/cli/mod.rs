// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};

use crate::api::{start_server, AppState};
use crate::content::ContentFetchConfig;
use crate::roast::{RoastConfig, RoastService};

/// Website Roaster
#[derive(Parser, Debug)]
#[command(name = "website-roaster")]
#[command(version)]
#[command(about = "Brutally honest AI feedback on landing page copy", long_about = None)]
pub struct Cli {
    /// Address to bind the web server to
    #[arg(long, env = "ROASTER_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to bind the web server to
    #[arg(long, env = "ROASTER_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl Cli {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Load configuration, build the roast service and serve until Ctrl+C
pub async fn execute(cli: Cli) -> Result<()> {
    let content_config = ContentFetchConfig::from_env();
    content_config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid content fetch configuration")?;

    let roast_config = RoastConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("invalid AI configuration")?;
    roast_config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid AI configuration")?;

    if !roast_config.has_credentials() {
        warn!(
            "No AI API key configured (set AIML_API_KEY or AIML_API_KEYS); policy {:?} applies to every roast",
            roast_config.failure_policy
        );
    }
    info!("AI configuration: {:?}", roast_config);

    let service = RoastService::new(content_config, roast_config)?;
    start_server(cli.listen_addr(), AppState::new(service)).await
}
