/// Inspector configuration, passed in from the page's bootstrap script
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Default API prefix for the field view.
pub const DEFAULT_API_PATH: &str = "/api/";

/// Which of the two page layouts to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Result rendered as a generated table; requests go to `{base}/{url}`.
    #[default]
    Table,
    /// Result written into fixed-id fields; requests go to `{api_path}{url}`.
    Fields,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid inspector options: {0}")]
    InvalidOptions(String),

    #[error("The field view needs a non-empty API path")]
    EmptyApiPath,

    #[error("Mount element not found: #{0}")]
    MountNotFound(String),
}

impl From<ConfigError> for JsValue {
    fn from(error: ConfigError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawInspectorConfig")]
pub struct InspectorConfig {
    pub variant: Variant,
    /// Base path for variant A, API prefix for variant B.
    pub service_path: String,
    pub capture_selection: bool,
    /// Id of the element to mount into; `<body>` when absent.
    pub mount: Option<String>,
}

/// Wire form of `InspectorConfig`; an absent `captureSelection` follows
/// the variant.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInspectorConfig {
    variant: Variant,
    #[serde(default)]
    service_path: String,
    #[serde(default)]
    capture_selection: Option<bool>,
    #[serde(default)]
    mount: Option<String>,
}

impl From<RawInspectorConfig> for InspectorConfig {
    fn from(raw: RawInspectorConfig) -> Self {
        InspectorConfig {
            variant: raw.variant,
            service_path: raw.service_path,
            capture_selection: raw
                .capture_selection
                .unwrap_or(raw.variant == Variant::Fields),
            mount: raw.mount,
        }
    }
}

impl InspectorConfig {
    /// Variant A served from the site root.
    pub fn table() -> Self {
        InspectorConfig {
            variant: Variant::Table,
            service_path: String::new(),
            capture_selection: false,
            mount: None,
        }
    }

    /// Variant B with selection capture on.
    pub fn fields(api_path: impl Into<String>) -> Self {
        InspectorConfig {
            variant: Variant::Fields,
            service_path: api_path.into(),
            capture_selection: true,
            mount: None,
        }
    }

    /// Parse a full config object handed over from JavaScript.
    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        let config: InspectorConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ConfigError::InvalidOptions(e.to_string()))?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.variant == Variant::Fields && self.service_path.is_empty() {
            return Err(ConfigError::EmptyApiPath);
        }
        Ok(self)
    }

    /// Build the request URL from an already-encoded path segment.
    pub fn request_url(&self, encoded_segment: &str) -> String {
        match self.variant {
            Variant::Table => format!(
                "{}/{}",
                self.service_path.trim_end_matches('/'),
                encoded_segment
            ),
            Variant::Fields => format!("{}{}", self.service_path, encoded_segment),
        }
    }
}

/// Options accepted by `start_field_inspector`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldViewOptions {
    pub api_path: Option<String>,
    pub capture_selection: Option<bool>,
    pub mount: Option<String>,
}

impl FieldViewOptions {
    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        if value.is_undefined() || value.is_null() {
            return Ok(FieldViewOptions::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::InvalidOptions(e.to_string()))
    }

    pub fn into_config(self) -> Result<InspectorConfig, ConfigError> {
        let mut config = InspectorConfig::fields(
            self.api_path.unwrap_or_else(|| DEFAULT_API_PATH.to_string()),
        );
        if let Some(capture) = self.capture_selection {
            config.capture_selection = capture;
        }
        config.mount = self.mount;
        config.validate()
    }
}
