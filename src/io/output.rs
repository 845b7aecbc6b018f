use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use super::DocumentFormat;

/// Where a finished snapshot is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        OutputDestination::File(path.as_ref().to_path_buf())
    }

    /// `-` means stdout, anything else is a file path.
    pub fn parse(raw: &str) -> Self {
        if raw == "-" {
            OutputDestination::Stdout
        } else {
            OutputDestination::file(raw)
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
    pub destinations: Vec<OutputDestination>,
}

impl OutputOptions {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
            destinations: vec![OutputDestination::Stdout],
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_destinations(mut self, destinations: Vec<OutputDestination>) -> Self {
        self.destinations = destinations;
        self
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(DocumentFormat::Json)
    }
}

/// Serialize a store snapshot and write it to every configured destination.
pub fn emit(value: &Value, options: &OutputOptions) -> Result<()> {
    if options.destinations.is_empty() {
        return Ok(());
    }
    let payload = serialize(value, options)?;
    for destination in &options.destinations {
        match destination {
            OutputDestination::Stdout => write_line(&mut io::stdout().lock(), &payload)
                .context("failed to write to stdout")?,
            OutputDestination::File(path) => File::create(path)
                .map_err(anyhow::Error::from)
                .and_then(|mut file| write_line(&mut file, &payload))
                .with_context(|| format!("failed to write to file {}", path.display()))?,
        }
    }
    Ok(())
}

fn serialize(value: &Value, options: &OutputOptions) -> Result<String> {
    match (options.format, options.pretty) {
        (DocumentFormat::Json, true) => {
            serde_json::to_string_pretty(value).context("failed to serialize JSON")
        }
        (DocumentFormat::Json, false) => {
            serde_json::to_string(value).context("failed to serialize JSON")
        }
        #[cfg(feature = "yaml")]
        (DocumentFormat::Yaml, _) => {
            serde_yaml::to_string(value).context("failed to serialize YAML")
        }
        #[cfg(feature = "toml")]
        (DocumentFormat::Toml, true) => {
            toml::to_string_pretty(value).context("failed to serialize TOML")
        }
        #[cfg(feature = "toml")]
        (DocumentFormat::Toml, false) => {
            toml::to_string(value).context("failed to serialize TOML")
        }
    }
}

fn write_line(writer: &mut impl Write, payload: &str) -> Result<()> {
    writer.write_all(payload.as_bytes())?;
    if !payload.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn nothing_to_do_without_destinations() {
        let options = OutputOptions::default().with_destinations(Vec::new());
        emit(&json!({"name": "Ada"}), &options).unwrap();
    }

    #[test]
    fn dash_means_stdout() {
        assert_eq!(OutputDestination::parse("-"), OutputDestination::Stdout);
        assert_eq!(
            OutputDestination::parse("out.json"),
            OutputDestination::file("out.json")
        );
    }

    #[test]
    fn compact_json_is_single_line() {
        let options = OutputOptions::default().with_pretty(false);
        let payload = serialize(&json!({"name": "Ada", "city": "Utrecht"}), &options).unwrap();
        assert_eq!(payload, r#"{"name":"Ada","city":"Utrecht"}"#);
    }

    #[test]
    fn writes_snapshot_to_file() {
        let path = std::env::temp_dir().join(format!(
            "fieldui-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let options =
            OutputOptions::default().with_destinations(vec![OutputDestination::file(&path)]);
        emit(&json!({"name": "Ada"}), &options).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"name\": \"Ada\""));
        assert!(contents.ends_with('\n'));
        let _ = fs::remove_file(path);
    }
}
