use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mustang_app_core::{FilePersistence, SearchPath};
use mustang_cli::{commands, CliAction};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about = "Headless companion for the Mustang head unit shell")]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, env = mustang_config::CONFIG_ENV_VAR)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start one of the shell's targets, exactly as its button would
    Run {
        #[arg(value_enum)]
        action: CliAction,
        /// Print the outcome as JSON instead of a status line
        #[arg(long)]
        json: bool,
    },
    /// Check that the tuning tool and a kiosk browser are available
    Doctor,
    /// Inspect or create the settings file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    Show,
    Init {
        #[arg(long)]
        force: bool,
    },
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let store = FilePersistence::resolve(cli.config);

    match cli.command {
        Commands::Run { action, json } => {
            let settings = store.load_settings()?;
            let outcome = commands::cmd_run(&settings.launch, SearchPath::from_env(), action);
            println!("{}", commands::render_outcome(&outcome, json)?);
            if !outcome.result.is_success() {
                std::process::exit(1);
            }
        }
        Commands::Doctor => {
            let settings = store.load_settings()?;
            let report = commands::cmd_doctor(&settings.launch, SearchPath::from_env());
            println!("{report}");
            if !report.healthy() {
                std::process::exit(1);
            }
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let settings = store.load_settings()?;
                println!("{}", commands::cmd_config_show(&settings)?);
            }
            ConfigCommands::Init { force } => {
                let path = commands::cmd_config_init(&store, force)?;
                println!("Wrote default settings to {}", path.display());
            }
        },
    }

    Ok(())
}
