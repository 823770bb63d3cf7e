pub mod adapters;
pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::adapters::resend::ResendMailer;
pub use crate::client::{ContactForm, FormFields, FormStatus};
pub use crate::config::CliConfig;
pub use crate::core::intake::IntakeService;
pub use crate::server::{build_router, AppState};
pub use crate::utils::error::{IntakeError, Result};
