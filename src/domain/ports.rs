use crate::domain::model::EmailMessage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Narrow seam to the transactional-email provider. One call, one attempt.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn from_address(&self) -> &str;
    fn to_address(&self) -> &str;
    fn subject(&self) -> &str;
}
