use crate::{envelope::RequestBody, error::BotError};
use async_trait::async_trait;

/// HTTP transport: the wire.
///
/// Performs exactly one request against
/// `<api root>/bot<token>/<method>` and hands back the raw response body.
/// Implementations must not retry and must not interpret the envelope;
/// decoding happens above this seam. Non-2xx statuses still carry an
/// envelope and are returned as bodies, not errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Human-readable transport name.
    fn name(&self) -> &str;

    /// Issue one call.
    ///
    /// [`RequestBody::Query`] maps to a GET with query parameters,
    /// [`RequestBody::Multipart`] to a multipart POST.
    async fn execute(
        &self,
        token: &str,
        method: &str,
        body: RequestBody,
    ) -> Result<Vec<u8>, BotError>;
}
