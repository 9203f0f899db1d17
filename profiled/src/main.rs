// This file is part of the product Profiled.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{LevelFilter, info};
use std::io::Write;
use std::sync::Arc;

use profiled::api;
use profiled::bootstrap;
use profiled::config::ValidatedConfig;
use profiled::store::{MongoProfileStore, ProfileStore};

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to set the runtime directory.");
            return 1;
        }
    };

    if matches!(parsed_args.mode, RunMode::Help) {
        print!("{}", help_text());
        return 0;
    }

    let bootstrap = match bootstrap::bootstrap_runtime(&parsed_args.runtime_root) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("❌ Bootstrap error: {}", error);
            eprintln!("❌ Application cannot start with invalid configuration.");
            return 1;
        }
    };

    let result = System::new().block_on(run_server(bootstrap));
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

async fn run_server(bootstrap: bootstrap::BootstrapResult) -> std::io::Result<()> {
    let validated_config = bootstrap.validated_config;
    let config_file = bootstrap.config_file;

    // Parse log level from config
    let log_level = match validated_config.logging.level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    // Configure logging with a stable format
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|error| {
            eprintln!("❌ Failed to initialize logger: {}", error);
            std::io::Error::other(error.to_string())
        })?;

    log_startup_info(&validated_config, &config_file);

    let store = match MongoProfileStore::connect(&validated_config.database).await {
        Ok(store) => store,
        Err(error) => {
            eprintln!("❌ Failed to initialize profile store: {}", error);
            return Err(std::io::Error::other(error.to_string()));
        }
    };
    let store: Arc<dyn ProfileStore> = Arc::new(store);
    info!(
        "✅ Profile store initialized on collection {}.{}",
        validated_config.database.name, validated_config.database.collection
    );

    let workers = validated_config.server.workers;
    let address = (
        validated_config.server.host.clone(),
        validated_config.server.port,
    );

    let factory = {
        let store = store.clone();

        move || {
            App::new()
                .app_data(web::Data::from(store.clone()))
                .wrap(Logger::new(
                    r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
                ))
                .configure(api::configure)
        }
    };

    HttpServer::new(factory)
        .workers(workers)
        .bind(address)?
        .run()
        .await
}

fn log_startup_info(config: &ValidatedConfig, config_file: &std::path::Path) {
    info!("Starting {} - {}", config.app.name, config.app.description);
    info!("Workers: {}", config.server.workers);
    info!(
        "Listening on http://{}:{}",
        config.server.host, config.server.port
    );
    info!(
        "Database: {} (collection {})",
        config.database.name, config.database.collection
    );
    info!("Config file: {}", config_file.display());

    if let Ok(current_dir) = std::env::current_dir() {
        info!("Working directory: {}", current_dir.display());
    }
}

fn help_text() -> String {
    [
        "profiled - document-backed profile record service",
        "",
        "Usage: profiled [-C <root>]",
        "",
        "  -C <root>    Runtime directory holding config.yaml (default: .)",
        "  -h, --help   Show this help",
        "",
    ]
    .join("\n")
}

enum RunMode {
    Serve,
    Help,
}

struct ParsedArgs {
    runtime_root: std::path::PathBuf,
    mode: RunMode,
}

fn parse_args() -> Result<ParsedArgs, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from<I>(args: I) -> Result<ParsedArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.iter().any(|arg| is_help_flag(arg)) {
        return Ok(ParsedArgs {
            runtime_root: std::path::PathBuf::from("."),
            mode: RunMode::Help,
        });
    }

    let mut args = args.into_iter();
    let mut runtime_root = std::path::PathBuf::from(".");

    while let Some(arg) = args.next() {
        if arg == "--" {
            continue;
        } else if arg == "-C" {
            let value = args
                .next()
                .ok_or_else(|| "Missing value for -C".to_string())?;
            runtime_root = std::path::PathBuf::from(value);
        } else {
            return Err(format!("Unknown argument: {}", arg));
        }
    }

    let runtime_root = make_runtime_root_absolute(runtime_root)?;

    Ok(ParsedArgs {
        runtime_root,
        mode: RunMode::Serve,
    })
}

fn is_help_flag(arg: &str) -> bool {
    arg == "-h" || arg == "--help"
}

fn make_runtime_root_absolute(
    runtime_root: std::path::PathBuf,
) -> Result<std::path::PathBuf, String> {
    if runtime_root.is_absolute() {
        return Ok(runtime_root);
    }

    let current_dir = std::env::current_dir()
        .map_err(|error| format!("Failed to resolve current directory: {}", error))?;
    Ok(current_dir.join(runtime_root))
}

#[cfg(test)]
mod tests {
    use super::{RunMode, parse_args_from};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse_args_defaults_to_serving_current_directory() {
        let parsed = parse_args_from(Vec::new()).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Serve));
        assert!(parsed.runtime_root.is_absolute());
    }

    #[test]
    fn parse_args_accepts_runtime_root() {
        let parsed = parse_args_from(args(&["-C", "runtime"])).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Serve));
        assert!(parsed.runtime_root.ends_with("runtime"));
    }

    #[test]
    fn parse_args_ignores_double_dash() {
        let parsed = parse_args_from(args(&["--", "-C", "runtime"])).expect("parse args");
        assert!(parsed.runtime_root.ends_with("runtime"));
    }

    #[test]
    fn parse_args_rejects_missing_root_value() {
        match parse_args_from(args(&["-C"])) {
            Err(error) => assert!(error.contains("-C")),
            Ok(_) => panic!("expected missing value error"),
        }
    }

    #[test]
    fn parse_args_rejects_unknown_arguments() {
        match parse_args_from(args(&["--verbose"])) {
            Err(error) => assert!(error.contains("--verbose")),
            Ok(_) => panic!("expected unknown argument error"),
        }
    }

    #[test]
    fn parse_args_accepts_help_flag() {
        let parsed = parse_args_from(args(&["--help"])).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Help));
    }

    #[test]
    fn parse_args_accepts_short_help_flag() {
        let parsed = parse_args_from(args(&["-h"])).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Help));
    }
}
