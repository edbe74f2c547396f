use crate::Float;

/// Determine whether the given unit-range coordinates are in gamut.
#[cfg(test)]
pub(crate) fn in_gamut(value: &[Float; 3]) -> bool {
    value.iter().all(|c| (0.0..=1.0).contains(c))
}

/// Clip the given coordinates to the unit range, mapping not-a-number to
/// zero.
pub(crate) fn clip(value: &[Float; 3]) -> [Float; 3] {
    let clamp = |c: Float| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };
    [clamp(value[0]), clamp(value[1]), clamp(value[2])]
}
