use common::utils::logging::{init_logging, init_logging_from_env, LogFormat};
use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn init_logging_for(cfg: Option<&AppConfig>) {
    let Some(cfg) = cfg else {
        init_logging_from_env();
        return;
    };
    match cfg.log.format.parse::<LogFormat>() {
        Ok(format) => init_logging(format, &cfg.log.filter),
        Err(e) => {
            init_logging(LogFormat::Compact, &cfg.log.filter);
            warn!(service = "wisdom", error = %e, "falling back to compact log format");
        }
    }
    info!(service = "wisdom", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG / LOG_FORMAT / DATABASE_URL apply
    dotenv().ok();
    let loaded = AppConfig::load_and_validate();
    init_logging_for(loaded.as_ref().ok());

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "wisdom",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    // A bad config is reported again by server::run, which refuses to start.
    let worker_threads = match &loaded {
        Ok(cfg) => cfg.server.worker_threads,
        Err(e) => {
            error!(service = "wisdom", event = "config_invalid", error = %format!("{e:#}"), "configuration rejected");
            std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok())
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "wisdom", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "wisdom",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "wisdom service starting"
    );

    // server::run drains in-flight requests itself on Ctrl+C
    rt.block_on(async move {
        match tokio::spawn(server::run()).await {
            Ok(Ok(())) => {
                info!(service = "wisdom", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Ok(Err(e)) => {
                error!(service = "wisdom", event = "run_failed", error = %format!("{e:#}"), "server::run returned error");
                std::process::ExitCode::FAILURE
            }
            Err(e) => {
                error!(service = "wisdom", event = "task_join_error", error = %e, "server task join error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
