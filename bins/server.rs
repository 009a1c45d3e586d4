use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // load .env first so RUST_LOG and LOG_FORMAT apply
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "reservation", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new({
        let service_id = service_id;
        move |info| {
            error!(
                service = "reservation",
                event = "panic",
                %service_id,
                pid,
                message = %info,
                "unhandled panic occurred"
            );
        }
    }));

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(
                service = "reservation",
                event = "config_invalid",
                error = %e,
                "failed to load configuration"
            );
            return std::process::ExitCode::FAILURE;
        }
    };
    let worker_threads = cfg.server.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(
                service = "reservation",
                event = "runtime_build_failed",
                error = %e,
                "failed to build tokio runtime"
            );
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "reservation",
        event = "start",
        %service_id,
        pid,
        version,
        bind = %cfg.bind_addr(),
        threads = worker_threads.unwrap_or_default(),
        "reservation service starting"
    );

    // server::run returns once Ctrl+C has drained connections
    rt.block_on(async move {
        match server::run(cfg).await {
            Ok(()) => {
                info!(
                    service = "reservation",
                    event = "stop",
                    %service_id,
                    pid,
                    "server stopped normally"
                );
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(
                    service = "reservation",
                    event = "run_failed",
                    error = %e,
                    "server::run returned error"
                );
                std::process::ExitCode::FAILURE
            }
        }
    })
}
