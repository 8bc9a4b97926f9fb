use std::time::Duration;

use tracing::debug;

use super::LoginInput;

pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

/// Stands in for the authentication request: waits `latency` then hands the
/// credentials back unchanged. It cannot fail.
pub async fn authenticate(input: LoginInput, latency: Duration) -> LoginInput {
    debug!("simulating login for {} ({:?})", input.email, latency);
    tokio::time::sleep(latency).await;
    input
}
