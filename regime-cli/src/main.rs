use clap::Parser;

use regime_cli::{app, cli::Cli, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.log_file.as_deref())?;

    let output = app::run(&cli)?;
    println!("{}", output.trim_end());

    Ok(())
}
