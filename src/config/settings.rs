use crate::utils::error::{Result, UtilsError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

const MAX_DELAY_MS: u64 = 60_000;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern"));

/// Contents of the optional TOML settings file.
///
/// ```toml
/// [async_math]
/// delay_ms = 1000
///
/// [logging]
/// level = "info"
/// json = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub async_math: AsyncMathSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AsyncMathSettings {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for AsyncMathSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_delay_ms() -> u64 {
    crate::core::math::ASYNC_ADD_DELAY.as_millis() as u64
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoggingSettings {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

impl Settings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| UtilsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DELAY_MS})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn async_add_delay(&self) -> Duration {
        Duration::from_millis(self.async_math.delay_ms)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_range("async_math.delay_ms", self.async_math.delay_ms, 0, MAX_DELAY_MS)?;

        if let Some(level) = &self.logging.level {
            validation::validate_log_level("logging.level", level)?;
        }

        Ok(())
    }
}
