//! parse-japanese CLI
//!
//! Parses Japanese text into NLCST and prints the tree.

mod cli;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser as _;
use miette::{IntoDiagnostic, Result, WrapErr};
use parse_japanese_ast::{Root, inspect};
use parse_japanese_parser::{JapaneseParser, Parser, ParserOptions};
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = resolve_options(cli)?;
    let parser = JapaneseParser::new(options).into_diagnostic()?;

    let source = match cli.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            check_extension(&parser, path);
            fs::read(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .into_diagnostic()
                .wrap_err("Failed to read stdin")?;
            buf
        }
    };

    let root = parser.parse_bytes(&source).into_diagnostic()?;
    let output = render(&root, cli.format, cli.pretty)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes()).into_diagnostic()?;
    Ok(())
}

/// Builds parser options from the config file, then applies flags on top.
fn resolve_options(cli: &Cli) -> Result<ParserOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            debug!("Loading options from {}", path.display());
            ParserOptions::from_file(path).into_diagnostic()?
        }
        None => ParserOptions::default(),
    };

    if cli.no_position {
        options.position_tracking = false;
    }
    if cli.pos {
        options.attach_token_metadata = true;
    }
    if let Some(dictionary) = &cli.dictionary {
        options.dictionary_path = dictionary.clone();
    }

    options.validate().into_diagnostic()?;
    Ok(options)
}

fn check_extension(parser: &impl Parser, path: &Path) {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !parser.can_parse(extension) {
        warn!(
            "{} does not look like plain text; parsing it as {} anyway",
            path.display(),
            parser.name()
        );
    }
}

fn render(root: &Root, format: OutputFormat, pretty: bool) -> Result<String> {
    let output = match format {
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(root).into_diagnostic()? + "\n"
        }
        OutputFormat::Json => serde_json::to_string(root).into_diagnostic()? + "\n",
        OutputFormat::Tree => inspect(root),
    };
    Ok(output)
}
