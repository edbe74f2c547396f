//! Bounded fixpoint iteration over colors.
//!
//! This module repeatedly applies a color operation to its own result until
//! a caller-supplied predicate holds, the iteration reaches a fixed point,
//! or it hits [`MAX_STEPS`]. Since every [`Color`] quantizes its channels to
//! 16 bits, the fixed point test is exact equality, which makes "the
//! operation stopped changing anything" a decidable condition rather than a
//! tolerance. [`Color::tint_ratio`](crate::Color::tint_ratio) builds on this
//! module to walk a color's lightness until it clears a contrast ratio.

use crate::Color;

/// The maximum number of iteration steps.
///
/// The cap guards against operations that keep changing the color without
/// ever satisfying the predicate, such as a hue rotation by an angle that
/// never revisits its start. A result of exactly this length indicates that
/// the iteration was cut off.
pub const MAX_STEPS: usize = 10_000;

/// Iterate the operation from the start color and collect all intermediate
/// colors.
///
/// The result starts with the start color itself and adds one color per
/// step. Iteration stops as soon as the predicate holds for the latest
/// color, the operation returns its own input, or the result has
/// [`MAX_STEPS`] colors.
///
/// ```
/// # use tinct::{iterate, Color};
/// let steps = iterate::sequence(
///     Color::new(0, 0, 0),
///     |color| color.lighten(10.0),
///     |color| color.lab_lightness() > 50.0,
/// );
/// assert_eq!(steps[0], Color::new(0, 0, 0));
/// assert!(steps.len() > 1);
/// assert!(steps.len() < 10);
/// ```
pub fn sequence(
    start: Color,
    op: impl Fn(&Color) -> Color,
    done: impl Fn(&Color) -> bool,
) -> Vec<Color> {
    let mut colors = vec![start];

    loop {
        // The vector starts out non-empty and only grows.
        let current = &colors[colors.len() - 1];
        if done(current) || MAX_STEPS <= colors.len() {
            break;
        }

        let next = op(current);
        if next == *current {
            break;
        }
        colors.push(next);
    }

    colors
}

/// Iterate the operation from the start color and return the final color.
///
/// This function is [`sequence`] without the intermediate colors. If the
/// predicate never holds, the result is the fixed point of the operation or,
/// failing that, the color after [`MAX_STEPS`] steps.
pub fn converge(
    start: Color,
    op: impl Fn(&Color) -> Color,
    done: impl Fn(&Color) -> bool,
) -> Color {
    let fallback = start.clone();
    sequence(start, op, done).pop().unwrap_or(fallback)
}

#[cfg(test)]
mod test {
    use super::{converge, sequence, MAX_STEPS};
    use crate::Color;

    #[test]
    fn test_immediate_termination() {
        let black = Color::new(0, 0, 0);

        // The predicate already holds for the start color.
        let steps = sequence(black.clone(), |color| color.lighten(10.0), |_| true);
        assert_eq!(steps, vec![black.clone()]);

        // The identity operation is a fixed point after one probe.
        let steps = sequence(black.clone(), Clone::clone, |_| false);
        assert_eq!(steps, vec![black]);
    }

    #[test]
    fn test_convergence() {
        let lightened = converge(
            Color::new(0, 0, 0),
            |color| color.lighten(10.0),
            |color| color.lab_lightness() > 50.0,
        );
        assert!(lightened.lab_lightness() > 50.0);
        assert!(lightened.lab_lightness() < 65.0);
    }

    #[test]
    fn test_saturating_fixed_point() {
        // Lightening white changes nothing, so the iteration stops at the
        // gamut boundary instead of running forever.
        let white = Color::new(0xffff, 0xffff, 0xffff);
        let steps = sequence(white.clone(), |color| color.lighten(10.0), |_| false);
        assert_eq!(*steps.last().unwrap(), white);
        assert!(steps.len() <= 2);
    }

    #[test]
    fn test_step_cap() {
        let black = Color::new(0, 0, 0);
        let white = Color::new(0xffff, 0xffff, 0xffff);

        // Oscillating between two colors never reaches a fixed point.
        let steps = sequence(
            black.clone(),
            |color| {
                if *color == black {
                    white.clone()
                } else {
                    black.clone()
                }
            },
            |_| false,
        );
        assert_eq!(steps.len(), MAX_STEPS);
    }
}
