use anyhow::Result;
use cambium::{
    commands::{self, CreateArgs, GlobalArgs},
    logging,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "cambium-create")]
#[command(about = "Create a new Cambium project folder structure (00-11 scheme)")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: CreateArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.global.verbose);

    let config = cli.global.load_config()?;
    commands::run_create(&cli.args, &config)
}
