use anyhow::Context;
use anyhow::Result;
use sssp::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sssp=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    let paths = sssp::run(&config).with_context(|| {
        format!(
            "shortest paths from {} to {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    info!(
        source = paths.source(),
        reachable = (0..paths.vertex_count())
            .filter(|&v| paths.is_reachable(v))
            .count(),
        "done"
    );
    Ok(())
}
