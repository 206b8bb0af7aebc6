//! American-odds payout arithmetic.

/// Potential payout for a stake at an American price.
///
/// Positive prices express profit per 100 staked, negative prices the
/// stake required per 100 profit. A price of zero is not a valid American
/// quote and yields zero rather than dividing by it.
pub fn potential_payout(price: f64, stake: f64) -> f64 {
    if price > 0.0 {
        stake * (price / 100.0)
    } else if price < 0.0 {
        stake * (100.0 / price.abs())
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_price() {
        assert_eq!(potential_payout(150.0, 10.0), 15.0);
        assert_eq!(potential_payout(100.0, 10.0), 10.0);
    }

    #[test]
    fn test_negative_price() {
        let payout = potential_payout(-150.0, 10.0);
        assert!((payout - 6.666_666).abs() < 0.001);
        assert_eq!(potential_payout(-100.0, 10.0), 10.0);
    }

    #[test]
    fn test_zero_price_does_not_divide() {
        assert_eq!(potential_payout(0.0, 10.0), 0.0);
    }
}
