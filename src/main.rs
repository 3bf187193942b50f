use anyhow::{anyhow, Result};
use std::process::ExitCode;
use tracing::Level;

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("could not install logger: {err}"))
}

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("{err:#}");
    }
    ExitCode::from(glsl_to_spv::run(std::env::args_os()).code())
}
