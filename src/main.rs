//! Workshop load calculator entry point: CLI wiring, reporting and serving.

mod cli;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use workshop_load::config::{AppConfig, load_workshop_totals, validate_workshop_totals};
use workshop_load::error::ConfigError;
use workshop_load::io::export::export_csv;
use workshop_load::io::import::{is_complete, load_equipment_file};
use workshop_load::load::{WorkshopTotals, evaluate};
use workshop_load::logging;

use crate::cli::CliArgs;

/// Loads the configuration: `--config` takes priority, then `--preset`,
/// then the built-in baseline.
fn load_config(cli: &CliArgs) -> Result<AppConfig, ConfigError> {
    #[allow(unused_mut)]
    let mut config = if let Some(path) = &cli.config {
        AppConfig::from_toml_file(path)?
    } else if let Some(name) = &cli.preset {
        AppConfig::from_preset(name)?
    } else {
        AppConfig::baseline()
    };

    #[cfg(feature = "api")]
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    Ok(config)
}

fn report_config_errors(errors: &[ConfigError]) -> bool {
    for e in errors {
        error!("{e}");
    }
    errors.is_empty()
}

/// Picks the whole-workshop totals: `--workshop-totals`, then the totals
/// carried by the input file, then the configuration.
fn resolve_totals(
    cli: &CliArgs,
    from_input: Option<WorkshopTotals>,
    config: &AppConfig,
) -> Result<WorkshopTotals> {
    if let Some(path) = &cli.workshop_totals {
        let totals = load_workshop_totals(path)
            .with_context(|| format!("failed to load workshop totals \"{}\"", path.display()))?;
        info!(path = %path.display(), "using workshop totals from file");
        return Ok(totals);
    }
    if let Some(totals) = from_input {
        if let Some(err) = validate_workshop_totals(&totals, "workshopTotals")
            .into_iter()
            .next()
        {
            return Err(err).context("workshop totals in the input file are invalid");
        }
        return Ok(totals);
    }
    Ok(config.workshop)
}

fn run_calculation(cli: &CliArgs, input: &Path, config: &AppConfig) -> Result<()> {
    let mut request = load_equipment_file(input)
        .with_context(|| format!("failed to load equipment list \"{}\"", input.display()))?;

    if cli.skip_incomplete {
        let before = request.equipment_list.len();
        request.equipment_list.retain(is_complete);
        let skipped = before - request.equipment_list.len();
        if skipped > 0 {
            warn!(skipped, "skipped incomplete equipment records");
        }
    }

    let workshop = resolve_totals(cli, request.workshop_totals, config)?;
    let evaluation = evaluate(request.equipment_list, &workshop);

    if cli.json {
        let json =
            serde_json::to_string_pretty(&evaluation).context("failed to serialize result")?;
        println!("{json}");
    } else {
        println!("{}", evaluation.result);
    }

    if let Some(path) = &cli.export {
        export_csv(&evaluation.equipment, path)
            .with_context(|| format!("failed to write CSV \"{}\"", path.display()))?;
        info!(path = %path.display(), "equipment values written");
    }

    Ok(())
}

#[cfg(feature = "api")]
fn run_server(cli: &CliArgs, config: &AppConfig) -> Result<()> {
    use std::net::{IpAddr, SocketAddr};
    use std::sync::Arc;

    let workshop = match &cli.workshop_totals {
        Some(path) => load_workshop_totals(path)
            .with_context(|| format!("failed to load workshop totals \"{}\"", path.display()))?,
        None => config.workshop,
    };
    let ip: IpAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid bind address \"{}\"", config.server.bind))?;
    let addr = SocketAddr::new(ip, config.server.port);
    let state = Arc::new(workshop_load::api::AppState { workshop });

    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(workshop_load::api::serve(state, addr))
        .context("API server failed")
}

fn main() -> ExitCode {
    let cli = CliArgs::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            logging::init("info");
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.logging.level);

    if !report_config_errors(&config.validate()) {
        return ExitCode::FAILURE;
    }

    if cli.input.is_none() && !cli.serve_requested() {
        error!("nothing to do: pass --input <file> or --serve");
        return ExitCode::FAILURE;
    }

    if let Some(input) = &cli.input {
        if let Err(e) = run_calculation(&cli, input, &config) {
            error!("{e:#}");
            return ExitCode::FAILURE;
        }
    }

    #[cfg(feature = "api")]
    if cli.serve {
        if let Err(e) = run_server(&cli, &config) {
            error!("{e:#}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
