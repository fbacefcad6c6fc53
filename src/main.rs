use clap::Parser;
use std::error::Error;
use std::path::Path;

use rust_passguard::api::{self, AppState};
use rust_passguard::cli::{handlers, Args, CliCommand};
use rust_passguard::core::config::Config;
use rust_passguard::core::engine::Engine;

fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true);

    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        builder.target(env_logger::Target::Pipe(Box::new(std::fs::File::create(path)?)));
    }

    builder.init();
    Ok(())
}

fn serve(engine: Engine, config: &Config) -> Result<(), Box<dyn Error>> {
    println!(
        "🚀 API server on http://{}:{} (docs at /swagger-ui/ and /redoc)",
        config.web_address, config.web_port
    );

    let state = AppState::new(engine, config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(api::start_server(state, &config.web_address, config.web_port))
        .map_err(|e| {
            log::error!("API server failed: {}", e);
            e
        })?;

    log::info!("API server shut down");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(port) = args.api_port {
        config.web_port = port;
    }
    if let Some(address) = args.address {
        config.web_address = address;
    }

    init_logging(&config)?;
    config.log_warnings();
    log::debug!(
        "Config: level {}, mode {}, advisor {}",
        config.default_security_level,
        config.default_mode,
        if config.advisor_enabled() { "on" } else { "off" }
    );

    let engine = Engine::from_config(&config);

    match args.command {
        Some(CliCommand::Analyze(opts)) => handlers::handle_analyze(&engine, &config, opts),
        Some(CliCommand::Suggest(opts)) => handlers::handle_suggest(&engine, &config, opts),
        Some(CliCommand::Generate { level, mode, enhanced, count, json }) => {
            handlers::handle_generate(&engine, &config, level, mode, enhanced, count, json)
        }
        Some(CliCommand::Benchmark { json }) => handlers::handle_benchmark(&engine, json),
        Some(CliCommand::Serve) | None => serve(engine, &config),
    }
}
