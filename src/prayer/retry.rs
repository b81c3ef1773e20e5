use std::fmt::Display;
use std::thread::sleep;
use std::time::Duration;

/// Retry an operation with exponential backoff
pub fn with_retry<F, T, E>(operation: F, max_retries: u32) -> Result<T, E>
where
    F: Fn() -> Result<T, E>,
    E: Display,
{
    with_retry_if(operation, max_retries, |_| true)
}

/// Like [`with_retry`], but gives up early on errors `retryable` rejects.
pub fn with_retry_if<F, T, E, P>(operation: F, max_retries: u32, retryable: P) -> Result<T, E>
where
    F: Fn() -> Result<T, E>,
    E: Display,
    P: Fn(&E) -> bool,
{
    let mut attempt = 0;
    loop {
        match operation() {
            Ok(result) => return Ok(result),
            Err(e) if attempt < max_retries && retryable(&e) => {
                let backoff_ms = 2_u64.pow(attempt) * 100; // 100ms, 200ms, 400ms, 800ms...
                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries,
                    backoff_ms,
                    "API call failed: {}. Retrying...",
                    e
                );
                sleep(Duration::from_millis(backoff_ms));
                attempt += 1;
            }
            Err(e) => {
                tracing::error!(attempts = attempt + 1, "API call failed: {}", e);
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_retry_succeeds_on_first_attempt() {
        let result = with_retry(|| Ok::<i32, String>(42), 3);
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_retry_succeeds_after_failures() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = with_retry(
            move || {
                let count = counter_clone.fetch_add(1, Ordering::SeqCst);
                if count < 2 {
                    Err("Simulated failure".to_string())
                } else {
                    Ok(42)
                }
            },
            3,
        );

        assert_eq!(result.unwrap(), 42);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_retry_exhausts_attempts() {
        let counter = AtomicU32::new(0);
        let result: Result<i32, String> = with_retry(
            || {
                counter.fetch_add(1, Ordering::SeqCst);
                Err("Always fails".to_string())
            },
            2,
        );
        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_non_retryable_error_stops_immediately() {
        let counter = AtomicU32::new(0);
        let result: Result<i32, String> = with_retry_if(
            || {
                counter.fetch_add(1, Ordering::SeqCst);
                Err("unauthorized".to_string())
            },
            3,
            |e| !e.contains("unauthorized"),
        );
        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
