use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use pushkind_catalog::models::config::{CatalogConfig, DEFAULT_CONFIG_PATH};
use pushkind_catalog::services::categories::import_categories;

/// Exit status when the document was read but some rows were rejected.
const EXIT_REJECTED_ROWS: u8 = 2;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config_path = env::var("CATALOG_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let config = match CatalogConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration from {config_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let Some(input_path) = env::args().nth(1) else {
        log::error!("Usage: pushkind-catalog <categories.json>");
        return ExitCode::FAILURE;
    };

    let file = match File::open(&input_path) {
        Ok(file) => file,
        Err(e) => {
            log::error!("Failed to open {input_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let report = match import_categories(BufReader::new(file)) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Import of {input_path} failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    match rendered {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to render import report: {e}");
            return ExitCode::FAILURE;
        }
    }

    if report.errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_REJECTED_ROWS)
    }
}
