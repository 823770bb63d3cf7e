use crate::adapters::resend::DEFAULT_ENDPOINT;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{IntakeError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub server: ServerSection,
    pub email: EmailSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSection {
    pub provider_endpoint: Option<String>,
    pub from_address: String,
    pub to_address: String,
    pub subject: Option<String>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(IntakeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| IntakeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTACT_TO})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bind(&self) -> &str {
        self.server.bind.as_deref().unwrap_or(super::DEFAULT_BIND)
    }

    pub fn provider_endpoint(&self) -> &str {
        self.email
            .provider_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT)
    }
}

impl ConfigProvider for FileConfig {
    fn from_address(&self) -> &str {
        &self.email.from_address
    }

    fn to_address(&self) -> &str {
        &self.email.to_address
    }

    fn subject(&self) -> &str {
        self.email.subject.as_deref().unwrap_or(super::DEFAULT_SUBJECT)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if self.bind().parse::<std::net::SocketAddr>().is_err() {
            return Err(IntakeError::InvalidConfigValueError {
                field: "server.bind".to_string(),
                value: self.bind().to_string(),
                reason: "Not a valid socket address".to_string(),
            });
        }
        validation::validate_url("email.provider_endpoint", self.provider_endpoint())?;
        validation::validate_non_empty_string("email.from_address", &self.email.from_address)?;
        validation::validate_email("email.to_address", &self.email.to_address)?;
        validation::validate_non_empty_string("email.subject", self.subject())?;
        Ok(())
    }
}
