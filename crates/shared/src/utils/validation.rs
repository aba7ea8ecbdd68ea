use std::borrow::{Borrow, Cow};
use validator::ValidationError;

/// Prices must be finite and not negative. NaN fails every range check, so it
/// is rejected explicitly.
pub fn validate_price(price: impl Borrow<f64>) -> Result<(), ValidationError> {
    let price = price.borrow();
    if price.is_finite() && *price >= 0.0 {
        return Ok(());
    }

    Err(ValidationError::new("price")
        .with_message(Cow::Borrowed("Price must be greater than or equal to zero")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive_prices() {
        assert!(validate_price(&0.0).is_ok());
        assert!(validate_price(&10.5).is_ok());
    }

    #[test]
    fn rejects_negative_nan_and_infinite_prices() {
        for price in [-0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(validate_price(&price).is_err(), "{price} accepted");
        }
    }
}
