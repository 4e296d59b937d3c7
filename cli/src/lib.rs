use shape_detect::{save_overlay, DetectionResult, DetectorConfig, Pipeline};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    DetectionError(#[from] shape_detect::ShapeError),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}

/// Loading and saving of detector configuration files.
///
/// Files only need the keys they override; everything else keeps the
/// compiled-in default.
pub trait ConfigFile: Sized {
    /// Load configuration from TOML string
    fn from_toml(content: &str) -> Result<Self, CliError>;

    /// Load configuration from JSON string
    fn from_json(content: &str) -> Result<Self, CliError>;

    /// Convert configuration to TOML string
    fn to_toml(&self) -> Result<String, CliError>;

    /// Auto-detect file format and load configuration
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&fs::read_to_string(path_ref)?),
            Some("json") => Self::from_json(&fs::read_to_string(path_ref)?),
            _ => Err(CliError::UnsupportedFileFormat),
        }
    }
}

impl ConfigFile for DetectorConfig {
    fn from_toml(content: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(content)?)
    }

    fn from_json(content: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(content)?)
    }

    fn to_toml(&self) -> Result<String, CliError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Inputs and outputs of one `detect` invocation
#[derive(Debug, Clone, Default)]
pub struct DetectRequest {
    pub input: PathBuf,
    /// Result JSON destination; `None` leaves printing to the caller
    pub output: Option<PathBuf>,
    pub geojson: Option<PathBuf>,
    pub overlay: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl DetectRequest {
    /// Run the pipeline on the input file and write every requested artifact
    pub fn run(&self) -> Result<DetectionResult, CliError> {
        let config = match &self.config {
            Some(path) => DetectorConfig::from_file(path)?,
            None => DetectorConfig::default(),
        };

        let bytes = fs::read(&self.input)?;
        let result = Pipeline::from_config(&config).detect(&bytes)?;
        tracing::info!(
            input = %self.input.display(),
            shapes = result.shapes.len(),
            "detection complete"
        );

        if let Some(path) = &self.output {
            fs::write(path, result.to_json_string()?)?;
            tracing::info!(path = %path.display(), "wrote result JSON");
        }
        if let Some(path) = &self.geojson {
            result.save_geojson(path)?;
            tracing::info!(path = %path.display(), "wrote GeoJSON");
        }
        if let Some(path) = &self.overlay {
            save_overlay(&bytes, &result, path)?;
            tracing::info!(path = %path.display(), "wrote overlay");
        }

        Ok(result)
    }
}
