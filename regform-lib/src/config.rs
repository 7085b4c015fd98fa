//! Form and loader configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Base URL of the public country-data service.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com";

/// How long the country list may take to arrive.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Complete configuration, as read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub form: FormConfig,
    pub loader: LoaderConfig,
}

/// How the coordinator finds its way around the document, and what it writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// ID of the form container.
    pub form_id: String,
    /// Marker class shared by every validated control.
    pub field_class: String,
    /// Marker class of the submit control.
    pub button_class: String,
    /// Class given to generated error elements.
    pub error_class: String,
    /// Submit caption while a submission is processed.
    pub processing_label: String,
    /// Country placeholder while the list is loading.
    pub loading_label: String,
    /// Country placeholder once the list has loaded.
    pub select_label: String,
    /// Country placeholder when the list couldn't be loaded.
    pub failed_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "registration".to_string(),
            field_class: "field".to_string(),
            button_class: "button".to_string(),
            error_class: "error".to_string(),
            processing_label: "Processing...".to_string(),
            loading_label: "Loading countries...".to_string(),
            select_label: "Select a country".to_string(),
            failed_label: "Failed to load countries".to_string(),
        }
    }
}

/// Where the country list comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl LoaderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
        }
    }
}
