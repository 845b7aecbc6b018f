use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use fieldui::{
    DocumentFormat, FieldObject, FieldUI, OutputDestination, OutputOptions, UiOptions,
    field_from_str,
};

#[derive(Debug, Parser)]
#[command(
    name = "fieldui",
    version,
    about = "Edit a single form field in the terminal"
)]
struct Cli {
    /// Field descriptor: file path, inline document, or "-" for stdin
    #[arg(short = 'f', long = "field", value_name = "SPEC")]
    field: String,

    /// Initial value for the field
    #[arg(long = "value", value_name = "TEXT")]
    value: Option<String>,

    /// Title shown above the field
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Output destinations ("-" writes to stdout). Defaults to stdout.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Focus the field as soon as the UI opens
    #[arg(long = "focus")]
    focus: bool,

    /// Hide the key help line
    #[arg(long = "no-help")]
    no_help: bool,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    let mut diagnostics = DiagnosticCollector::default();

    let descriptor_hint = (cli.field != "-")
        .then(|| DocumentFormat::from_path(Path::new(&cli.field)))
        .flatten();
    let field = match load_field(&cli.field, descriptor_hint.unwrap_or_default()) {
        Ok(field) => Some(field),
        Err(err) => {
            diagnostics.push_input("field", format!("{err:#}"));
            None
        }
    };
    let output = build_output_options(&cli, descriptor_hint, &mut diagnostics);

    diagnostics.into_result()?;
    let Some(field) = field else {
        return Err(eyre!("no field descriptor loaded"));
    };
    tracing::info!(id = %field.id, kind = %field.kind, "loaded field descriptor");

    let options = UiOptions::default()
        .with_help(!cli.no_help)
        .with_focus_on_start(cli.focus);
    let mut ui = FieldUI::new(field).with_options(options).with_output(output);
    if let Some(title) = cli.title.as_ref() {
        ui = ui.with_title(title.clone());
    }
    if let Some(value) = cli.value.as_ref() {
        ui = ui.with_initial_value(value.clone());
    }

    ui.run().map_err(|err| Report::msg(format!("{err:#}")))?;
    Ok(())
}

fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let Some(path) = cli.log_file.as_ref() else {
        return Ok(None);
    };
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("log file path {} has no file name", path.display()))?;
    fs::create_dir_all(directory)
        .wrap_err_with(|| format!("failed to create log directory {}", directory.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "fieldui={level},fieldui_cli={level}",
            level = cli.log_level
        ))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
    Ok(Some(guard))
}

fn load_field(spec: &str, format: DocumentFormat) -> Result<FieldObject> {
    if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read from stdin")?;
        return parse_field(&buffer, format, "field from stdin");
    }

    let path = PathBuf::from(spec);
    match fs::read_to_string(&path) {
        Ok(contents) => parse_field(&contents, format, &path.display().to_string()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            parse_field(spec, format, "inline field")
        }
        Err(err) => {
            Err(Report::new(err).wrap_err(format!("failed to read {}", path.display())))
        }
    }
}

fn parse_field(contents: &str, format: DocumentFormat, label: &str) -> Result<FieldObject> {
    match field_from_str(contents, format) {
        Ok(field) => Ok(field),
        Err(primary) => {
            for candidate in DocumentFormat::available_formats() {
                if candidate == format {
                    continue;
                }
                if let Ok(field) = field_from_str(contents, candidate) {
                    return Ok(field);
                }
            }
            Err(eyre!(
                "failed to parse {label}: tried {} ({primary:#})",
                format_list()
            ))
        }
    }
}

fn format_list() -> String {
    DocumentFormat::available_formats()
        .into_iter()
        .map(|fmt| fmt.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn build_output_options(
    cli: &Cli,
    descriptor_hint: Option<DocumentFormat>,
    diagnostics: &mut DiagnosticCollector,
) -> OutputOptions {
    let mut destinations = Vec::new();
    let mut format = None;
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            diagnostics.push_output("output destination cannot be empty");
            continue;
        }
        let destination = OutputDestination::parse(raw);
        if let OutputDestination::File(path) = &destination {
            match DocumentFormat::from_path(path) {
                Some(detected) => match format {
                    Some(existing) if existing != detected => diagnostics.push_output(format!(
                        "output file {} uses {detected} but other destinations use {existing}; align extensions",
                        path.display()
                    )),
                    _ => format = Some(detected),
                },
                None => diagnostics.push_output(format!(
                    "cannot infer format from output file {}; use one of: {}",
                    path.display(),
                    format_list()
                )),
            }
        }
        destinations.push(destination);
    }
    if destinations.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }

    OutputOptions::new(format.or(descriptor_hint).unwrap_or_default())
        .with_pretty(!cli.no_pretty)
        .with_destinations(destinations)
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push_input(&mut self, label: &str, message: impl Into<String>) {
        self.messages
            .push(format!("input ({label}): {}", message.into()));
    }

    fn push_output(&mut self, message: impl Into<String>) {
        self.messages.push(format!("output: {}", message.into()));
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered input/output issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}
