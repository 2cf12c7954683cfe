use clap::{Parser, Subcommand};
use crm_jobs_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "crm-jobs")]
#[command(version)]
#[command(about = "CRM housekeeping jobs: inactive customer cleanup, reminders, restock, reports")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Directory to change into before opening the database
    #[arg(long, value_name = "DIR", global = true)]
    workdir: Option<String>,

    /// Database path
    #[arg(long, global = true)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Delete customers without an order inside the inactivity window (default)
    Cleanup {
        /// Report the inactive customers without deleting them
        #[arg(long)]
        dry_run: bool,

        /// Inactivity window in days
        #[arg(long, value_name = "N")]
        days: Option<u32>,
    },
    /// Log reminders for orders placed in the last week
    Reminders,
    /// Top up products that are low on stock
    Restock,
    /// Log customer, order and revenue totals
    Report,
    /// Record that the CRM and its database are alive
    Heartbeat,
    /// Run every enabled job on its interval until Ctrl-C
    Schedule,
    /// Apply pending database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Cleanup {
        dry_run: false,
        days: None,
    });

    let inactivity_days = match &command {
        Command::Cleanup { days, .. } => *days,
        _ => None,
    };
    let cli_overrides = CliOverrides {
        database_path: cli.database,
        log_level: cli.log_level,
        workdir: cli.workdir,
        inactivity_days,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    if let Err(e) = bootstrap::change_workdir(&config) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    info!(version = env!("CARGO_PKG_VERSION"), command = ?command, "Starting crm-jobs");

    let pool = bootstrap::init_database(&config.database).await?;

    if let Command::Migrate = command {
        return commands::migrate(&pool).await;
    }

    let repos = di::Repositories::new(pool, &config.jobs);
    let use_cases = di::UseCases::new(&repos);

    match command {
        Command::Cleanup { dry_run, .. } => {
            commands::cleanup(&use_cases, &config.jobs.cleanup, dry_run).await
        }
        Command::Reminders => commands::reminders(&use_cases, &config.jobs.reminders).await,
        Command::Restock => commands::restock(&use_cases, &config.jobs.restock).await,
        Command::Report => commands::report(&use_cases).await,
        Command::Heartbeat => commands::heartbeat(&use_cases).await,
        Command::Schedule => commands::schedule(&use_cases, &config.jobs).await,
        Command::Migrate => Ok(()),
    }
}
