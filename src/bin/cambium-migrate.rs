use anyhow::Result;
use cambium::{
    commands::{self, GlobalArgs, MigrateArgs},
    logging,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "cambium-migrate")]
#[command(about = "Migrate a legacy project folder into the Cambium 00-11 structure")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: MigrateArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.global.verbose);

    let config = cli.global.load_config()?;
    commands::run_migrate(&cli.args, &config)
}
