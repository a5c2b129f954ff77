//! `roadgrid` entry point.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use roadgrid_cli::{Cli, Quote, TripRequest};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    let request =
        TripRequest::parse(&cli.start, &cli.target, &cli.roads).context("Invalid input")?;
    let quote = Quote::compute(&request, &cli.quote_options()).context("Invalid input")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print!("{quote}");
    }
    Ok(())
}
