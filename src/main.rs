// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use subscribe::{cli, commands, config::Settings, store::Store};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    // RUST_LOG wins over --verbose; default stays quiet so tables are clean
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if matches.get_flag("verbose") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let settings = Settings::from_matches(&matches)?;
    let mut store = Store::seeded()?;
    commands::dispatch(&mut store, &settings, &matches)?;
    Ok(())
}
