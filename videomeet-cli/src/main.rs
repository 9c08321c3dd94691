/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

use clap::Parser;
use tracing::level_filters::LevelFilter;
use videomeet_cli::cli_args::{Mode, Opt};
use videomeet_cli::modes::{new_meeting::new_meeting, token::token, whoami::whoami};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::parse();

    match opt.mode {
        Mode::Whoami => whoami(&opt.backend).await?,
        Mode::Token => token(&opt.backend).await?,
        Mode::NewMeeting(args) => new_meeting(&opt.backend, args).await?,
    };

    Ok(())
}
