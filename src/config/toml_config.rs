use crate::core::comprehension::GeneratorSettings;
use crate::core::delays::DEFAULT_MAX_DELAY;
use crate::domain::model::GITHUB_API_BASE;
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const MAX_DELAY_CEILING: f64 = 3600.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrillConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub delays: DelaysConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DelaysConfig {
    pub n: Option<usize>,
    pub max_delay: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub count: Option<usize>,
    pub interval_ms: Option<u64>,
    pub upper_bound: Option<f64>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            base_url: Some(GITHUB_API_BASE.to_string()),
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

impl DrillConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DrillError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GITHUB_API})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DrillError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn github_base_url(&self) -> &str {
        self.github.base_url.as_deref().unwrap_or(GITHUB_API_BASE)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.github.timeout_seconds.map(Duration::from_secs)
    }

    pub fn user_agent(&self) -> &str {
        self.github
            .user_agent
            .as_deref()
            .unwrap_or(crate::adapters::http::DEFAULT_USER_AGENT)
    }

    pub fn delay_count(&self) -> usize {
        self.delays.n.unwrap_or(5)
    }

    pub fn max_delay(&self) -> f64 {
        self.delays.max_delay.unwrap_or(DEFAULT_MAX_DELAY)
    }

    pub fn generator_settings(&self) -> GeneratorSettings {
        let defaults = GeneratorSettings::default();
        GeneratorSettings {
            count: self.generator.count.unwrap_or(defaults.count),
            interval: self
                .generator
                .interval_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.interval),
            upper_bound: self.generator.upper_bound.unwrap_or(defaults.upper_bound),
        }
    }
}

impl Validate for DrillConfig {
    fn validate(&self) -> Result<()> {
        validate_url("github.base_url", self.github_base_url())?;
        validate_non_empty_string("github.user_agent", self.user_agent())?;

        if let Some(timeout) = self.github.timeout_seconds {
            validate_positive_number("github.timeout_seconds", timeout, 1)?;
        }
        if let Some(n) = self.delays.n {
            validate_positive_number("delays.n", n, 1)?;
        }
        if let Some(max_delay) = self.delays.max_delay {
            validate_range("delays.max_delay", max_delay, 0.0, MAX_DELAY_CEILING)?;
        }
        if let Some(bound) = self.generator.upper_bound {
            validate_range("generator.upper_bound", bound, 0.0, f64::MAX)?;
        }

        Ok(())
    }
}
