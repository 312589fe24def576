//! cmake-tmlanguage - TextMate grammar generation from CMake's help output.

use cmake_tmlanguage::cli::{Cli, OutputFormat};
use cmake_tmlanguage::cmake::ProcessCMakeClient;
use cmake_tmlanguage::config::Config;
use cmake_tmlanguage::error::{GrammarError, Result};
use cmake_tmlanguage::gatherer::Gatherer;
use cmake_tmlanguage::logging;
use cmake_tmlanguage::render::{render_json, GrammarRenderer};
use std::io::Write;
use tracing::{error, info, warn};

fn main() {
    let cli = Cli::parse_args();
    logging::init_stderr_logging(cli.log_level());

    if let Err(e) = run(&cli) {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Load configuration file
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    // Build the renderer first so a broken template fails before CMake runs
    let renderer = match cli.format {
        OutputFormat::Grammar => Some(match config.resolve_template(cli.template.as_deref()) {
            Some(path) => {
                info!("Using template: {}", path.display());
                GrammarRenderer::from_template_file(&path)?
            }
            None => GrammarRenderer::new()?,
        }),
        OutputFormat::Json => None,
    };

    let executable = config.resolve_executable(cli.cmake_path());
    let gatherer = Gatherer::new(
        ProcessCMakeClient::new(executable),
        config.extraction.clone(),
    );
    let model = gatherer.gather()?;

    let empty: Vec<_> = model.commands_without_keywords().collect();
    if !empty.is_empty() {
        warn!(
            "{} commands have no signature keywords: {}",
            empty.len(),
            empty.join(", ")
        );
    }

    let document = match &renderer {
        Some(renderer) => renderer.render(&model)?,
        None => render_json(&model)?,
    };

    if cli.stdout {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{document}")
            .map_err(|e| GrammarError::io(format!("Failed to write to stdout: {e}")))?;
        return Ok(());
    }

    let output = config.resolve_output(cli.output.as_deref());
    std::fs::write(&output, document).map_err(|e| {
        GrammarError::io(format!("Failed to write {}: {e}", output.display()))
    })?;
    info!("Wrote {}", output.display());

    Ok(())
}
