//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Vehicle license plate used in report file names.
    pub license_plate: Option<String>,
    /// Driver name used in report file names.
    pub driver_name: Option<String>,
    /// Directory exported reports are written to.
    pub output_dir: PathBuf,
    /// Identifier used when both plate and driver are blank.
    pub report_fallback_name: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("license_plate", &self.license_plate)
            .field("driver_name", &self.driver_name)
            .field("output_dir", &self.output_dir)
            .field("report_fallback_name", &self.report_fallback_name)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            license_plate: None,
            driver_name: None,
            output_dir: PathBuf::from("."),
            report_fallback_name: "Report".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // KOR_LICENSE_PLATE, KOR_DRIVER_NAME, ...
        figment = figment.merge(Env::prefixed("KOR_"));

        figment.extract()
    }

    /// Returns a copy where the given command-line values take precedence.
    #[must_use]
    pub fn with_overrides(
        mut self,
        license_plate: Option<String>,
        driver_name: Option<String>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if license_plate.is_some() {
            self.license_plate = license_plate;
        }
        if driver_name.is_some() {
            self.driver_name = driver_name;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }
}

/// Returns the platform-specific config directory for kor.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("kor"))
}
