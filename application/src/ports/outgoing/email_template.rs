use crate::error::BoxError;

/// A compiled template that turns serialized data into an email body.
#[cfg_attr(test, mockall::automock)]
pub trait EmailTemplatePort: Send + Sync {
    fn render(&self, data: &serde_json::Value) -> Result<String, BoxError>;
}
