//! Platform sleep for timer-driven page updates.

use std::time::Duration;

#[cfg(feature = "desktop")]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(not(feature = "desktop"))]
pub async fn sleep(duration: Duration) {
    gloo::timers::future::sleep(duration).await;
}
