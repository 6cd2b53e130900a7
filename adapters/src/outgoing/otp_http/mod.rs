pub mod fonnte;
pub mod registry;
pub mod watzap;

use courier_application::error::{AppError, AppResult};
use tracing::{error, warn};

/// Vendors report failures inside the body, so it is handed back whatever the status.
async fn read_body(vendor: &str, response: reqwest::Response) -> AppResult<String> {
    let status = response.status();
    if !status.is_success() {
        warn!(vendor = vendor, status = %status, "OTP vendor returned a non-success status");
    }

    response.text().await.map_err(|e| {
        error!(vendor = vendor, error = %e, "Failed to read OTP vendor response");
        AppError::transport(e)
    })
}
