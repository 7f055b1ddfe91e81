use crate::errors::{AppError, AppResult};
use crate::layout::LayoutConfig;
use crate::pagination::HeaderOffsetPolicy;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Which printer family a job goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// Managed spooler service over HTTP
    Spool,
    /// Direct serial ESC/P2 printer
    Serial,
}

impl Driver {
    pub fn as_str(&self) -> &'static str {
        match self {
            Driver::Spool => "spool",
            Driver::Serial => "serial",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the ledger service.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL of the local print spooler service.
    #[serde(default = "default_spooler_url")]
    pub spooler_url: String,

    /// Default driver when `print` is invoked without `--driver`.
    #[serde(default = "default_driver")]
    pub driver: Driver,

    /// Spooler printer name; first available printer when unset.
    #[serde(default)]
    pub printer: Option<String>,

    /// Serial device path; discovered by USB vendor id when unset.
    #[serde(default)]
    pub serial_port: Option<String>,

    /// Lines reserved by the pre-printed page header.
    #[serde(default = "default_header_lines")]
    pub header_lines: u32,

    /// Printable transaction lines per passbook page.
    #[serde(default = "default_lines_per_page")]
    pub lines_per_page: u32,

    /// Serial line pitch in 1/180 inch units (30 = 1/6 inch).
    #[serde(default = "default_line_spacing")]
    pub line_spacing: u32,

    /// Pause between serial lines so the device buffer keeps up.
    #[serde(default = "default_inter_line_delay_ms")]
    pub inter_line_delay_ms: u64,

    #[serde(default)]
    pub header_offset_policy: HeaderOffsetPolicy,

    /// Column layout override. When unset each driver uses its own
    /// profile: absolute columns for the spooler books, sequential for
    /// the narrow serial books.
    #[serde(default)]
    pub layout: Option<LayoutConfig>,
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_spooler_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_driver() -> Driver {
    Driver::Spool
}
fn default_header_lines() -> u32 {
    6
}
fn default_lines_per_page() -> u32 {
    30
}
fn default_line_spacing() -> u32 {
    30
}
fn default_inter_line_delay_ms() -> u64 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            spooler_url: default_spooler_url(),
            driver: default_driver(),
            printer: None,
            serial_port: None,
            header_lines: default_header_lines(),
            lines_per_page: default_lines_per_page(),
            line_spacing: default_line_spacing(),
            inter_line_delay_ms: default_inter_line_delay_ms(),
            header_offset_policy: HeaderOffsetPolicy::default(),
            layout: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rpassbook")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rpassbook")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpassbook.conf")
    }

    /// Load configuration from `path`, or from the standard location, or
    /// return defaults when no file exists yet.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        let file = match path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if file.exists() {
            let content = fs::read_to_string(&file).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", file.display())))
        } else {
            Ok(Config::default())
        }
    }

    /// Write the default configuration file, creating the directory.
    pub fn init(path: Option<&str>) -> AppResult<PathBuf> {
        let file = match path {
            Some(p) => PathBuf::from(p),
            None => {
                fs::create_dir_all(Self::config_dir())?;
                Self::config_file()
            }
        };

        let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
        let mut out = fs::File::create(&file).map_err(|_| AppError::ConfigSave)?;
        out.write_all(yaml.as_bytes()).map_err(|_| AppError::ConfigSave)?;
        Ok(file)
    }

    /// Column layout for the given driver: explicit override first, then
    /// the driver's own profile.
    pub fn layout_for(&self, driver: Driver) -> LayoutConfig {
        if let Some(layout) = &self.layout {
            return layout.clone();
        }
        match driver {
            Driver::Spool => LayoutConfig::default(),
            Driver::Serial => LayoutConfig::sequential(),
        }
    }

    /// Sanity checks for values a typo in the config file would break.
    pub fn check(&self) -> AppResult<()> {
        if self.api_base_url.is_empty() {
            return Err(AppError::Config("api_base_url must not be empty".into()));
        }
        if self.spooler_url.is_empty() {
            return Err(AppError::Config("spooler_url must not be empty".into()));
        }
        if self.lines_per_page == 0 {
            return Err(AppError::Config("lines_per_page must be at least 1".into()));
        }
        if self.line_spacing == 0 || self.line_spacing > 255 {
            return Err(AppError::Config(
                "line_spacing must be between 1 and 255 units of 1/180 inch".into(),
            ));
        }
        Ok(())
    }
}
