use crate::errors::CallstubError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StubConfig {
    /// Label used in log events and `Debug` output.
    pub name: Option<String>,
}

impl StubConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, CallstubError> {
        toml::from_str(text).map_err(|e| CallstubError::ConfigParse(e.to_string()))
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<StubConfig, CallstubError> {
    let text = read_file(path.as_ref())?;
    StubConfig::from_toml_str(&text)
}

/// A fixed-list stub described on disk.
///
/// ```toml
/// name = "fetch_user"
/// values = ["woot", 5]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fixture<R> {
    #[serde(flatten)]
    pub config: StubConfig,
    pub values: Vec<R>,
}

impl<R: DeserializeOwned> Fixture<R> {
    pub fn from_toml_str(text: &str) -> Result<Self, CallstubError> {
        toml::from_str(text).map_err(|e| CallstubError::Fixture(e.to_string()))
    }

    pub fn from_json_str(text: &str) -> Result<Self, CallstubError> {
        serde_json::from_str(text).map_err(|e| CallstubError::Fixture(e.to_string()))
    }
}

/// Reads `.json` fixtures with serde_json and anything else as TOML.
pub fn load_fixture<R: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<Fixture<R>, CallstubError> {
    let path = path.as_ref();
    let text = read_file(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let fixture = if is_json {
        Fixture::from_json_str(&text)
    } else {
        Fixture::from_toml_str(&text)
    };
    fixture.map_err(|e| CallstubError::Fixture(format!("{}: {e}", path.display())))
}

fn read_file(path: &Path) -> Result<String, CallstubError> {
    std::fs::read_to_string(path)
        .map_err(|e| CallstubError::Io(format!("{}: {e}", path.display())))
}
