//! Process bootstrap shared by the binaries: `.env`, config, logging, panic hook.

use configs::{AppConfig, LogFormat};
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

/// Per-run context handed back to a binary after bootstrap.
pub struct RunContext {
    pub service: &'static str,
    pub service_id: Uuid,
    pub config: AppConfig,
}

impl RunContext {
    pub fn log_stop(&self) {
        info!(
            service = self.service,
            event = "stop",
            service_id = %self.service_id,
            pid = std::process::id(),
            "finished"
        );
    }
}

fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => common::utils::logging::init_logging_default(),
        LogFormat::Json => common::utils::logging::init_logging_json(),
    }
}

/// Load `.env` and config, install logging and the panic hook, log `start`.
///
/// An invalid config file is logged and replaced by defaults.
pub fn bootstrap(service: &'static str) -> RunContext {
    // .env 需在读取配置与 RUST_LOG 之前加载
    dotenv().ok();

    let loaded = AppConfig::load_and_validate();
    let format = loaded.as_ref().map(|c| c.logging.format).unwrap_or_default();
    init_logging(format);
    info!(service, event = "logger_init", "tracing subscriber initialized");

    let config = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service, event = "config_invalid", error = %e, "falling back to default config");
            AppConfig::default()
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    std::panic::set_hook(Box::new(move |info| {
        error!(
            service,
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    info!(
        service,
        event = "config_loaded",
        fetch_url = %config.fetch.url,
        log_format = ?config.logging.format,
        "configuration ready"
    );
    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version = env!("CARGO_PKG_VERSION"),
        "starting"
    );
    RunContext { service, service_id, config }
}
