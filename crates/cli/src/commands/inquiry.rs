//! Order form submission.

use sonero_storefront::AppState;
use sonero_storefront::db::RepositoryError;
use sonero_storefront::models::InquiryForm;
use sonero_storefront::store::FileStore;
use tracing::{info, warn};

/// Validate and record an inquiry.
///
/// # Errors
///
/// Returns an error if a field is invalid or the order cannot be recorded.
/// Field errors are logged individually before returning.
pub async fn submit(state: &AppState<FileStore>, form: InquiryForm) -> Result<(), RepositoryError> {
    match state.orders().submit_inquiry(form).await {
        Ok(order) => {
            info!(id = %order.id, kind = %order.details.kind, "Inquiry recorded");
            Ok(())
        }
        Err(RepositoryError::Validation(report)) => {
            for (field, message) in report.errors() {
                warn!(field, "{message}");
            }
            Err(RepositoryError::Validation(report))
        }
        Err(e) => Err(e),
    }
}
