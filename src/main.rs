use patternbook::{
    config::SETTINGS_FILE, init_logging, run_demo, ResultExt, Settings, StdoutSurface,
};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| format!("loading {SETTINGS_FILE}.toml"))?;
    let logging = init_logging(&settings.logging)?;

    tracing::info!(
        git = env!("GIT_COMMIT"),
        build_time = env!("BUILD_TIME"),
        started_at = %chrono::Local::now().to_rfc3339(),
        heading = %settings.heading,
        "patternbook starting"
    );

    // stdout: только разметка, логи уходят в stderr
    let mut surface = StdoutSurface::stdout();
    let result = run_demo(&settings, &mut surface);

    match &result {
        Ok(report) => {
            if let Ok(json) = serde_json::to_string(report) {
                tracing::debug!(report = %json, "demo report");
            }
            tracing::info!(
                deliveries = report.deliveries.len(),
                config_shared = report.config_is_shared(),
                "demo finished"
            );
        }
        Err(err) => tracing::error!(
            status = %err.status_code(),
            client_message = %err.client_message(),
            "demo failed: {err:?}"
        ),
    }

    logging.shutdown();
    result?;
    Ok(())
}
