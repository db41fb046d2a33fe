#![deny(warnings)]

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use hawkdeck::{
    core::state::AppState,
    trace_dbg,
    domain::registry::SlideRegistry,
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    if let Some(assets) = &args.assets {
        config.assets_dir = assets.clone();
    }

    // --deck wins over the configured deck; neither means the built-in one
    let registry = match trace_dbg!(args.deck.as_ref().or(config.deck.as_ref())) {
        Some(path) => SlideRegistry::from_path(path)?,
        None => SlideRegistry::builtin()?,
    };

    if args.list {
        for (i, slide) in registry.visible().iter().enumerate() {
            println!("{:>2}. {}", i + 1, slide.display_title());
        }
        return Ok(());
    }

    let state = AppState::new(registry.visible(), config, args.start_index());
    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(state, tui)?;
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
