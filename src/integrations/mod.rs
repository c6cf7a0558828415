use async_trait::async_trait;

use crate::domain::FormState;
use crate::error::Result;

pub mod contact_api;

/// Destination for submitted contact/registration forms.
///
/// Any error means the visitor sees the generic failure message and keeps
/// their input; there is no retry.
#[async_trait]
pub trait ContactGateway: Send + Sync {
    fn name(&self) -> &str;
    async fn deliver(&self, form: &FormState) -> Result<()>;
}
