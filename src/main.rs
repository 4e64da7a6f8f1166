use anyhow::Result;
use campaign_etl::pipeline;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) run the pipeline over the fixed directories ──────────────
    pipeline::run("files/input", "files/output")?;

    info!("all done");
    Ok(())
}
