use clap::Parser;
use hcloud_domain::app::inspect::render_payload;
use hcloud_domain::utils::{logger, validation::Validate};
use hcloud_domain::{CliConfig, ClientConfig, HcloudError, HydrationMode};
use std::io::Read;

fn read_payload(input: &str) -> Result<String, HcloudError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    Ok(std::fs::read_to_string(input)?)
}

fn run(cli: &CliConfig, config: &ClientConfig) -> Result<Vec<String>, HcloudError> {
    let mode = if cli.strict {
        HydrationMode::Strict
    } else {
        config.hydration_mode()
    };
    tracing::debug!(?mode, input = %cli.input, "reading payload");

    let content = read_payload(&cli.input)?;
    let payload: serde_json::Value = serde_json::from_str(&content)?;
    render_payload(&payload, cli.kind, mode)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => ClientConfig::from_file(path),
        None => Ok(ClientConfig::default()),
    }
    .and_then(|config| config.validate().map(|_| config));

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger(cli.verbose, &config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(&cli, &config) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            tracing::error!("❌ Inspection failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
