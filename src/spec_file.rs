//! Loading of [`CommandSpec`] definitions from disk.
//!
//! Files ending in `.json` are read as JSON; everything else (`.yml`,
//! `.yaml`, no extension) is read as YAML.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::model::CommandSpec;

#[derive(Debug, thiserror::Error)]
pub enum SpecFileError {
    #[error("failed to read spec file {path:?}: {cause}")]
    FailedToRead {
        path: PathBuf,
        cause: std::io::Error,
    },
    #[error("failed to parse spec file {path:?}: {cause}")]
    FailedToParse {
        path: PathBuf,
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Serialized representation of a spec file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Yaml,
    Json,
}

impl SpecFormat {
    pub fn from_path(path: &Path) -> SpecFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => SpecFormat::Json,
            _ => SpecFormat::Yaml,
        }
    }
}

impl CommandSpec {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CommandSpec, SpecFileError> {
        let path = path.as_ref();
        debug!("Loading command spec from {}...", path.display());

        let contents = fs::read_to_string(path).map_err(|cause| SpecFileError::FailedToRead {
            path: path.to_path_buf(),
            cause,
        })?;

        CommandSpec::parse(&contents, SpecFormat::from_path(path)).map_err(|cause| {
            SpecFileError::FailedToParse {
                path: path.to_path_buf(),
                cause,
            }
        })
    }

    pub fn parse(
        contents: &str,
        format: SpecFormat,
    ) -> Result<CommandSpec, Box<dyn std::error::Error + Send + Sync>> {
        match format {
            SpecFormat::Json => Ok(serde_json::from_str(contents)?),
            SpecFormat::Yaml => Ok(serde_yaml::from_str(contents)?),
        }
    }
}
