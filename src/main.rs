use eml_roster::{Config, run};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = Config::from_current_dir().and_then(|config| run(&config));
    match result {
        Ok(summary) if summary.output.is_none() => info!("Done, no roster written"),
        Ok(summary) => info!(
            "Done: {} rows from {} files ({} skipped)",
            summary.unique, summary.discovered, summary.skipped
        ),
        Err(e) => error!("Roster run failed: {e}"),
    }
}
