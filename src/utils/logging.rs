use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use std::env;
use std::io::Write;

fn level_from_env(value: &str) -> LevelFilter {
    match value.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

pub fn init_logging() {
    let env = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_level = level_from_env(&env);

    let mut builder = Builder::new();

    builder.format(|buf, record| {
        let timestamp = buf.timestamp();
        let target = record.target();
        let file = record.file().unwrap_or("unknown");
        let line = record.line().unwrap_or(0);

        match record.level() {
            Level::Info => writeln!(buf, "{} [INFO] [{}]: {}", timestamp, target, record.args()),
            level => writeln!(
                buf,
                "{} [{}] [{}:{}] {}: {}",
                timestamp,
                level,
                file,
                line,
                target,
                record.args()
            ),
        }
    });

    builder.filter_level(log_level);

    // Renderer and HTTP internals are chatty at info
    if env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()) == "production" {
        for module in ["reqwest", "hyper", "wgpu", "wgpu_core", "iced_wgpu", "naga"] {
            builder.filter_module(module, LevelFilter::Warn);
        }
    }

    builder.target(Target::Stdout);

    // A second init (e.g. from tests) keeps the first logger
    let _ = builder.try_init();
}

pub fn log_error_with_context(error: &anyhow::Error, context: &str) {
    log::error!("[{}] {}", context, error);

    for cause in error.chain().skip(1) {
        log::error!("  Caused by: {}", cause);
    }
}

pub fn log_network_error(operation: &str, error: &dyn std::error::Error) {
    log::warn!("[Network] {} failed: {}", operation, error);
}

pub fn log_api_call(method: &str, path: &str, status: u16, duration_ms: u64) {
    if status >= 400 {
        log::warn!("[API] {} {} -> {} in {}ms", method, path, status, duration_ms);
    } else {
        log::debug!("[API] {} {} -> {} in {}ms", method, path, status, duration_ms);
    }
}

pub fn log_events_loaded(start: &str, end: &str, count: usize) {
    log::info!("[Calendar] Loaded {} events for {}..{}", count, start, end);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(level_from_env("error"), LevelFilter::Error);
        assert_eq!(level_from_env("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_from_env("verbose"), LevelFilter::Info);
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging();
        init_logging();
        log::info!("logging initialized");
    }
}
