use clap::{Parser, Subcommand};
use std::path::Path;

use classroom_manager::application::errors::{AppError, ConfigError};
use classroom_manager::application::messaging::{CommandDispatcher, Session};
use classroom_manager::application::services::ClassroomRegistry;
use classroom_manager::infrastructure::adapters::ConsoleAdapter;
use classroom_manager::infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "classroom-manager")]
#[command(about = "Track classrooms, enrollment and assignment submissions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            let (config, load_error) = load_config(&cli.config);
            init_logging(&config.logging.level);
            if let Some(e) = load_error {
                tracing::warn!("Failed to load config: {}, using defaults", e);
            }

            if let Err(e) = run_session(config) {
                tracing::error!("Session failed: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("classroom-manager v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

/// Load the config file if present, falling back to env defaults.
/// Any error is returned alongside the fallback so it can be logged once
/// logging is up.
fn load_config(path: &str) -> (Config, Option<ConfigError>) {
    let loaded = if Path::new(path).exists() {
        Config::load(path)
    } else {
        Config::load_env()
    };

    match loaded {
        Ok(config) => (config, None),
        Err(e) => (Config::load_env().unwrap_or_default(), Some(e)),
    }
}

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run_session(config: Config) -> Result<(), AppError> {
    let registry = ClassroomRegistry::new()
        .with_removal_policy(config.registry.removal_policy);
    tracing::info!(
        "Starting {} (removal policy {:?})",
        config.manager.name,
        registry.removal_policy()
    );
    let dispatcher = CommandDispatcher::new(registry)
        .with_name(config.manager.name.clone());

    let mut session = Session::new(ConsoleAdapter::new(), dispatcher)
        .with_prompt(config.manager.prompt.clone());
    if config.manager.greeting {
        session = session.with_greeting();
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(session.run())
}

fn init_config() {
    match Config::default().to_yaml() {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
        }
        Err(e) => eprintln!("Failed to render default config: {}", e),
    }
}
