use crate::di::UseCases;
use crm_jobs_domain::config::{CleanupJobConfig, JobsConfig, ReminderJobConfig, RestockJobConfig};
use crm_jobs_domain::{InactivityPolicy, RestockPolicy};
use crm_jobs_infrastructure::database::run_migrations;
use crm_jobs_jobs::{
    CrmReportJob, HeartbeatJob, InactiveCustomerCleanupJob, JobRunner, LowStockRestockJob,
    OrderReminderJob,
};
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn cleanup(
    use_cases: &UseCases,
    cfg: &CleanupJobConfig,
    dry_run: bool,
) -> anyhow::Result<()> {
    let policy = InactivityPolicy::new(cfg.inactivity_days);
    let summary = use_cases.cleanup_customers.execute(policy, dry_run).await?;

    println!("{}", summary.console_summary());
    if dry_run && !summary.inactive_ids.is_empty() {
        let ids: Vec<String> = summary.inactive_ids.iter().map(i64::to_string).collect();
        println!("Inactive customer ids: {}", ids.join(", "));
    }
    Ok(())
}

pub async fn reminders(use_cases: &UseCases, cfg: &ReminderJobConfig) -> anyhow::Result<()> {
    use_cases.send_reminders.execute(cfg.window_days).await?;
    println!("Order reminders processed!");
    Ok(())
}

pub async fn restock(use_cases: &UseCases, cfg: &RestockJobConfig) -> anyhow::Result<()> {
    let policy = RestockPolicy {
        threshold: cfg.threshold,
        increment: cfg.increment,
    };
    let summary = use_cases.restock_products.execute(policy).await?;
    println!("{}", summary.console_summary());
    Ok(())
}

pub async fn report(use_cases: &UseCases) -> anyhow::Result<()> {
    let run = use_cases.generate_report.execute().await?;
    println!("CRM Report generated: {}", run.line());
    Ok(())
}

pub async fn heartbeat(use_cases: &UseCases) -> anyhow::Result<()> {
    let run = use_cases.heartbeat.execute().await?;
    println!("Heartbeat logged: {}", run.line());
    Ok(())
}

pub async fn migrate(pool: &SqlitePool) -> anyhow::Result<()> {
    run_migrations(pool).await?;
    println!("Database migrations applied");
    Ok(())
}

/// Run the enabled jobs on their intervals until Ctrl-C.
pub async fn schedule(use_cases: &UseCases, jobs: &JobsConfig) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();
    let mut runner = JobRunner::new().with_shutdown_token(shutdown.clone());

    if jobs.cleanup.enabled {
        runner = runner.with_cleanup(
            InactiveCustomerCleanupJob::new(
                use_cases.cleanup_customers.clone(),
                InactivityPolicy::new(jobs.cleanup.inactivity_days),
            )
            .with_interval(jobs.cleanup.interval_secs),
        );
    }
    if jobs.reminders.enabled {
        runner = runner.with_reminders(
            OrderReminderJob::new(use_cases.send_reminders.clone(), jobs.reminders.window_days)
                .with_interval(jobs.reminders.interval_secs),
        );
    }
    if jobs.restock.enabled {
        runner = runner.with_restock(
            LowStockRestockJob::new(
                use_cases.restock_products.clone(),
                RestockPolicy {
                    threshold: jobs.restock.threshold,
                    increment: jobs.restock.increment,
                },
            )
            .with_interval(jobs.restock.interval_secs),
        );
    }
    if jobs.report.enabled {
        runner = runner.with_report(
            CrmReportJob::new(use_cases.generate_report.clone())
                .with_interval(jobs.report.interval_secs),
        );
    }
    if jobs.heartbeat.enabled {
        runner = runner.with_heartbeat(
            HeartbeatJob::new(use_cases.heartbeat.clone())
                .with_interval(jobs.heartbeat.interval_secs),
        );
    }

    let running = runner.start().await;
    if running.is_empty() {
        println!("No jobs enabled; nothing to schedule");
        return Ok(());
    }
    println!(
        "Scheduler running {} jobs; press Ctrl-C to stop",
        running.len()
    );

    let signal = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received, stopping jobs");
    shutdown.cancel();
    // Runs in progress finish, log included, before the runtime goes away.
    running.join().await;
    info!("All jobs stopped");
    signal?;
    Ok(())
}
