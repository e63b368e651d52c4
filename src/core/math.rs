//! Arithmetic helpers over `f64`.
//!
//! Mathematically undefined inputs return [`MathError`] instead of `NaN`.

use crate::utils::error::MathError;
use std::future::Future;
use std::time::Duration;

/// Delay before [`async_add`] yields its sum.
pub const ASYNC_ADD_DELAY: Duration = Duration::from_millis(1000);

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Fails with [`MathError::DivisionByZero`] when `b` is zero (either sign).
pub fn divide(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

pub fn power(base: f64, exp: f64) -> f64 {
    base.powf(exp)
}

pub fn sqrt(x: f64) -> Result<f64, MathError> {
    if x < 0.0 {
        return Err(MathError::invalid_argument("Square root of negative number"));
    }
    Ok(x.sqrt())
}

/// `n!` for non-negative `n`, with `0! == 1`.
///
/// Only integral `n` is meaningful. A fractional `n` multiplies every
/// integer `k` with `2 <= k <= n`.
pub fn factorial(n: f64) -> Result<f64, MathError> {
    if n < 0.0 {
        return Err(MathError::invalid_argument("Factorial of negative number"));
    }

    let mut result: f64 = 1.0;
    let mut k = 2.0;
    // 超過 170! 後結果為 inf，不必再乘
    while k <= n && result.is_finite() {
        result *= k;
        k += 1.0;
    }
    Ok(result)
}

/// Logarithm of `x` in `base`, or the natural logarithm when `base` is `None`.
pub fn log(x: f64, base: Option<f64>) -> Result<f64, MathError> {
    if x <= 0.0 {
        return Err(MathError::invalid_argument(
            "Logarithm of non-positive number",
        ));
    }

    Ok(match base {
        Some(base) => x.ln() / base.ln(),
        None => x.ln(),
    })
}

/// Yields `a + b` once [`ASYNC_ADD_DELAY`] has elapsed.
///
/// See [`async_add_after`].
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn async_add(a: f64, b: f64) -> impl Future<Output = f64> + Send + 'static {
    async_add_after(a, b, ASYNC_ADD_DELAY)
}

/// Yields `a + b` once `delay` has elapsed on the tokio clock.
///
/// The timer is armed when this function is called, not when the returned
/// future is first polled. Dropping the future discards the result.
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn async_add_after(a: f64, b: f64, delay: Duration) -> impl Future<Output = f64> + Send + 'static {
    let timer = tokio::time::sleep(delay);
    tracing::trace!(a, b, delay_ms = delay.as_millis() as u64, "deferred addition scheduled");

    async move {
        timer.await;
        a + b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_negative_zero() {
        assert_eq!(divide(1.0, -0.0), Err(MathError::DivisionByZero));
        assert_eq!(divide(-9.0, 3.0), Ok(-3.0));
    }

    #[test]
    fn test_power_fractional_exponent() {
        assert!((power(9.0, 0.5) - 3.0).abs() < 1e-12);
        assert_eq!(power(5.0, 0.0), 1.0);
    }

    #[test]
    fn test_sqrt_of_zero() {
        assert_eq!(sqrt(0.0), Ok(0.0));
    }

    #[test]
    fn test_factorial_overflows_to_infinity() {
        assert_eq!(factorial(170.0).map(f64::is_finite), Ok(true));
        assert_eq!(factorial(171.0), Ok(f64::INFINITY));
    }

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0.0), Ok(1.0));
        assert_eq!(factorial(10.0), Ok(3_628_800.0));
    }

    #[test]
    fn test_factorial_non_integer_is_unspecified() {
        // Not part of the contract; pinned so a change in behaviour is noticed.
        assert_eq!(factorial(3.5), Ok(6.0));
    }

    #[test]
    fn test_log_rejects_negative_input() {
        assert_eq!(
            log(-1.0, Some(10.0)),
            Err(MathError::InvalidArgument {
                message: "Logarithm of non-positive number".to_string()
            })
        );
        assert!((log(8.0, Some(2.0)).unwrap() - 3.0).abs() < 1e-12);
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_add_after_custom_delay() {
        let started = tokio::time::Instant::now();
        let sum = async_add_after(1.5, 2.5, Duration::from_millis(250)).await;
        assert_eq!(sum, 4.0);
        assert!(started.elapsed() >= Duration::from_millis(250));
    }
}
