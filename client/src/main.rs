use std::{env, process::ExitCode, time::Instant};

use anyhow::Context;
use libgame::AutoAdvance;
use log::info;

use config::ClientConfig;
use state::State;

mod cli;
mod config;
mod renderer;
mod seed;
mod state;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match cli::parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("! {e:?}");
            eprint!("{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(args) {
        eprintln!("! {e:?}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: cli::Args) -> anyhow::Result<()> {
    let config = match &args.config_path {
        Some(config_path) => ClientConfig::load(config_path)?,
        None => ClientConfig::default(),
    };

    let session = seed::build_session(&args.seed, &config)?;
    let auto = AutoAdvance::new(config.auto_advance_config()?, Instant::now())
        .context("Invalid auto-advance settings")?;

    let (width, height) = session.dimensions();
    info!(
        "starting {width}x{height} board with {} live cells, auto-advance every {:?}",
        session.grid().live_count(),
        auto.interval()
    );

    renderer::run(State::new(session, auto), &config)
}
