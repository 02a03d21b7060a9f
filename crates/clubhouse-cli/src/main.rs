//! Clubhouse CLI - single entrypoint for the club website backend

mod commands;

use clap::{Parser, Subcommand};
use commands::{CreateAdminCommand, ResetPasswordCommand, ServeCommand};

#[derive(Parser)]
#[command(author, version, about = "Coding club website backend", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "CLUBHOUSE_LOG_LEVEL", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve(ServeCommand),
    /// Create an admin user
    CreateAdmin(CreateAdminCommand),
    /// Reset the admin user's password
    ResetAdminPassword(ResetPasswordCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // If RUST_LOG is set, use it directly; otherwise default all clubhouse
    // crates to the requested level and keep dependencies at warn.
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .expect("Invalid RUST_LOG environment variable")
    } else {
        let level = &cli.log_level;
        tracing_subscriber::EnvFilter::new(format!(
            "clubhouse_cli={level},\
             clubhouse_core={level},\
             clubhouse_entities={level},\
             clubhouse_migrations={level},\
             clubhouse_database={level},\
             clubhouse_auth={level},\
             clubhouse_content={level},\
             clubhouse_analytics={level},\
             clubhouse_assistant={level},\
             warn"
        ))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Serve(cmd) => cmd.execute(),
        Commands::CreateAdmin(cmd) => cmd.execute(),
        Commands::ResetAdminPassword(cmd) => cmd.execute(),
    }
}
