pub mod file;

use crate::adapters::resend::DEFAULT_ENDPOINT;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{IntakeError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_FROM: &str = "HT Electrical <contact@htelectrical.us>";
pub const DEFAULT_TO: &str = "contact@htelectrical.us";
pub const DEFAULT_SUBJECT: &str = "New web quote request:";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contact-intake")]
#[command(about = "Contact form intake service for the HT Electrical site")]
pub struct CliConfig {
    /// TOML 設定檔路徑；提供時取代其餘旗標
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: String,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub provider_endpoint: String,

    #[arg(long, default_value = DEFAULT_FROM)]
    pub from_address: String,

    #[arg(long, default_value = DEFAULT_TO)]
    pub to_address: String,

    #[arg(long, default_value = DEFAULT_SUBJECT)]
    pub subject: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log in JSON format for hosted deployments")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn from_address(&self) -> &str {
        &self.from_address
    }

    fn to_address(&self) -> &str {
        &self.to_address
    }

    fn subject(&self) -> &str {
        &self.subject
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.bind.parse::<std::net::SocketAddr>().is_err() {
            return Err(IntakeError::InvalidConfigValueError {
                field: "bind".to_string(),
                value: self.bind.clone(),
                reason: "Not a valid socket address".to_string(),
            });
        }
        validation::validate_url("provider_endpoint", &self.provider_endpoint)?;
        validation::validate_non_empty_string("from_address", &self.from_address)?;
        validation::validate_email("to_address", &self.to_address)?;
        validation::validate_non_empty_string("subject", &self.subject)?;
        Ok(())
    }
}
