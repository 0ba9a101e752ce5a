use anyhow::Result;
use cambium::{
    commands::{self, AuditArgs, CreateArgs, GlobalArgs, MigrateArgs, PdfArgs},
    logging,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cambium")]
#[command(about = "Scaffold, migrate and audit millwork project folders (Cambium 00-11 standard)")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project folder structure
    Create(CreateArgs),
    /// Migrate a legacy project folder into the Cambium structure
    Migrate(MigrateArgs),
    /// Print page text from a PDF, saving images of scanned pages
    Pdf(PdfArgs),
    /// Generate an HTML audit worksheet from an inventory JSON file
    Audit(AuditArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.global.verbose);

    match cli.command {
        Commands::Create(args) => {
            let config = cli.global.load_config()?;
            commands::run_create(&args, &config)
        }
        Commands::Migrate(args) => {
            let config = cli.global.load_config()?;
            commands::run_migrate(&args, &config)
        }
        Commands::Pdf(args) => commands::run_pdf(&args),
        Commands::Audit(args) => commands::run_audit(&args),
    }
}
