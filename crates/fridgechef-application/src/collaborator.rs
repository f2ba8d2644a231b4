//! Time-bounded calls to external collaborators.

use fridgechef_core::error::{FridgeError, Result};
use std::future::Future;
use std::time::Duration;

/// Awaits `call`, failing with [`FridgeError::Timeout`] once `limit` elapses.
pub(crate) async fn bounded<T, F>(service: &'static str, limit: Duration, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(
                "[Collaborator] {} did not answer within {:?}",
                service,
                limit
            );
            Err(FridgeError::timeout(service, limit.as_secs()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_bounded_times_out() {
        let result: Result<()> = bounded("catalog", Duration::from_secs(2), async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(())
        })
        .await;

        let err = result.unwrap_err();
        assert!(matches!(err, FridgeError::Timeout { service: "catalog", seconds: 2 }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_bounded_passes_through_result() {
        let value = bounded("catalog", Duration::from_secs(2), async { Ok(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);

        let err = bounded::<(), _>("catalog", Duration::from_secs(2), async {
            Err(FridgeError::collaborator("catalog", "down"))
        })
        .await
        .unwrap_err();
        assert!(matches!(err, FridgeError::Collaborator { .. }));
    }
}
