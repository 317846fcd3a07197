use std::process::ExitCode;

use anyhow::Result;
use starfall::{cli, settings, window, SceneRunner};
use starfall_engine::{MonotonicClock, PopulationCounts, SceneDirector};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let counts = match cli::parse_counts(std::env::args().skip(1)) {
        Ok(counts) => counts,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(1);
        }
    };

    match start(counts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn start(counts: PopulationCounts) -> Result<()> {
    let config = settings::load_config(counts)?;
    let seed = settings::resolve_seed()?;
    let bounds = config.bounds;
    let director = SceneDirector::new(config, seed)?;

    let runner = SceneRunner::new(director, MonotonicClock::new());
    macroquad::Window::from_config(window::conf(bounds), window::run(runner, bounds));
    Ok(())
}
