//! Hue palette for class coloring.

use treeviz_error::{Error, Result};

/// `n` hues evenly spaced around the HSV color wheel, in `[0, 1)`.
pub fn generate_color_brew(n: usize) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(Error::invalid_argument("color brew needs at least one class")
            .with_operation("core::generate_color_brew"));
    }
    let step = 1.0 / n as f64;
    Ok((0..n).map(|i| i as f64 * step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use treeviz_error::ErrorKind;

    #[test]
    fn test_four_hues() {
        assert_eq!(generate_color_brew(4).unwrap(), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_single_hue() {
        assert_eq!(generate_color_brew(1).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_hues_stay_below_one() {
        let brew = generate_color_brew(7).unwrap();
        assert_eq!(brew.len(), 7);
        assert!(brew.iter().all(|h| (0.0..1.0).contains(h)));
        assert!(brew.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_zero_classes_is_rejected() {
        let err = generate_color_brew(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
