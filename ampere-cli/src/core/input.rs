/// Parse the user-entered magnitude.
///
/// Anything but a non-negative finite number yields [`None`], which the engine treats as zero.
#[must_use]
pub fn parse_magnitude(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite() && *value >= 0.0)
}
