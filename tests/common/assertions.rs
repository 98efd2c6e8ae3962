//! Custom test assertions

use shop_backend::ShopError;

/// Assert two values are approximately equal (for floats)
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_approx_eq!($left, $right, 1e-6_f64)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {
        let (left, right) = ($left as f64, $right as f64);
        assert!(
            (left - right).abs() < $epsilon,
            "assertion failed: `{} ≈ {}` (epsilon {})",
            left,
            right,
            $epsilon
        );
    };
}

/// Assert a validation error carries a message for `field`
pub fn assert_field_error(err: &ShopError, field: &str) {
    assert!(
        matches!(err, ShopError::Validation(_)),
        "expected a validation error, got {:?}",
        err
    );
    assert!(
        err.field_errors().iter().any(|f| f.field_name == field),
        "expected field error on {:?}, got {:?}",
        field,
        err.field_errors()
    );
}
