pub mod intake;
pub mod render;

pub use crate::domain::model::{EmailMessage, Submission, SubmissionRequest};
pub use crate::domain::ports::{ConfigProvider, Mailer};
pub use crate::utils::error::Result;
