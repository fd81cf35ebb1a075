/// Convert a span in seconds to a `Duration`, saturating at zero
pub fn secs_to_duration(secs: f64) -> std::time::Duration {
    if secs.is_finite() && secs > 0.0 {
        std::time::Duration::from_secs_f64(secs)
    } else {
        std::time::Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secs_to_duration_saturates() {
        assert_eq!(secs_to_duration(-1.0), std::time::Duration::ZERO);
        assert_eq!(secs_to_duration(f64::NAN), std::time::Duration::ZERO);
        assert_eq!(secs_to_duration(0.25), std::time::Duration::from_millis(250));
    }
}
