use clap::Parser;
use timeword::utils::{logger, validation::Validate};
use timeword::{CliConfig, LocalStorage, TimeWordFormatter, TimeWordRunner};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to resolve settings: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    let runner = TimeWordRunner::new(TimeWordFormatter::new(), LocalStorage::current_dir());

    match runner.run(&settings) {
        Ok(summary) => {
            if let Some(rendered) = &summary.rendered {
                print!("{}", rendered);
            }
            if let Some(path) = &summary.output_path {
                eprintln!("📁 Output saved to: {}", path);
            }
            if summary.result.has_failures() {
                eprintln!(
                    "⚠️  {} of {} times could not be converted",
                    summary.result.failed(),
                    summary.result.records.len()
                );
            }
            std::process::exit(summary.exit_code());
        }
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
