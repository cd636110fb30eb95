use clap::Parser;

use mealdeck::cli::Cli;
use mealdeck::logging;
use mealdeck::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    ui::runtime::run(&runtime, &cli)?;
    Ok(())
}
