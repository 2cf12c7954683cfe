mod database;

pub use database::init_database;

use anyhow::Context;
use crm_jobs_domain::{CliOverrides, Config};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Diagnostics go to stderr; stdout is reserved for job summaries.
pub fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

/// Enter the configured working directory, if any.
pub fn change_workdir(config: &Config) -> anyhow::Result<()> {
    let Some(dir) = config.runtime.workdir.as_deref() else {
        return Ok(());
    };

    std::env::set_current_dir(dir)
        .with_context(|| format!("cannot change to working directory {dir}"))?;
    info!(workdir = dir, "Changed working directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_workdir(workdir: Option<&str>) -> Config {
        let mut config = Config::default();
        config.runtime.workdir = workdir.map(str::to_string);
        config
    }

    #[test]
    fn test_no_workdir_is_a_no_op() {
        let before = std::env::current_dir().unwrap();

        change_workdir(&config_with_workdir(None)).unwrap();

        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_missing_workdir_is_an_error() {
        let before = std::env::current_dir().unwrap();

        let err = change_workdir(&config_with_workdir(Some("/nonexistent/crm-jobs/workdir")))
            .unwrap_err();

        assert!(err.to_string().contains("/nonexistent/crm-jobs/workdir"));
        assert_eq!(std::env::current_dir().unwrap(), before);
    }
}
