//! Support for computing the difference between colors.

use crate::Float;

/// 25^7, a recurring constant of the CIEDE2000 formula.
const POW25_7: Float = 6_103_515_625.0;

/// Convert radians to degrees in the 0..360 range.
fn to_positive_degrees(radians: Float) -> Float {
    let degrees = radians.to_degrees();
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Compute the CIEDE2000 color difference ΔE*00 between two Lab colors.
///
/// Unlike the plain Euclidean distance in Lab, this metric corrects for the
/// non-uniformity of Lab in the blue region and for small chroma. It is
/// symmetric in its arguments; identical colors have distance zero.
pub(crate) fn delta_e_2000(lab1: &[Float; 3], lab2: &[Float; 3]) -> Float {
    let [l1, a1, b1] = *lab1;
    let [l2, a2, b2] = *lab2;

    // Adjust the a axis based on mean chroma.
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_mean = (c1 + c2) / 2.0;
    let c_mean_7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean_7 / (c_mean_7 + POW25_7)).sqrt());

    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);

    let h1p = if c1p == 0.0 {
        0.0
    } else {
        to_positive_degrees(b1.atan2(a1p))
    };
    let h2p = if c2p == 0.0 {
        0.0
    } else {
        to_positive_degrees(b2.atan2(a2p))
    };

    // The three deltas.
    let delta_l = l2 - l1;
    let delta_c = c2p - c1p;
    let delta_h_angle = if c1p * c2p == 0.0 {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };
    let delta_h =
        2.0 * (c1p * c2p).sqrt() * (delta_h_angle.to_radians() / 2.0).sin();

    // The weighting functions.
    let l_mean = (l1 + l2) / 2.0;
    let cp_mean = (c1p + c2p) / 2.0;
    let hp_mean = if c1p * c2p == 0.0 {
        h1p + h2p
    } else {
        let sum = h1p + h2p;
        if (h1p - h2p).abs() <= 180.0 {
            sum / 2.0
        } else if sum < 360.0 {
            (sum + 360.0) / 2.0
        } else {
            (sum - 360.0) / 2.0
        }
    };

    let t = 1.0 - 0.17 * (hp_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_mean).to_radians().cos()
        + 0.32 * (3.0 * hp_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_mean - 63.0).to_radians().cos();

    let l_mean_sq = (l_mean - 50.0) * (l_mean - 50.0);
    let sl = 1.0 + 0.015 * l_mean_sq / (20.0 + l_mean_sq).sqrt();
    let sc = 1.0 + 0.045 * cp_mean;
    let sh = 1.0 + 0.015 * cp_mean * t;

    // The rotation term for the blue region.
    let delta_theta = 30.0 * (-((hp_mean - 275.0) / 25.0) * ((hp_mean - 275.0) / 25.0)).exp();
    let cp_mean_7 = cp_mean.powi(7);
    let rc = 2.0 * (cp_mean_7 / (cp_mean_7 + POW25_7)).sqrt();
    let rt = -rc * (2.0 * delta_theta).to_radians().sin();

    let term_l = delta_l / sl;
    let term_c = delta_c / sc;
    let term_h = delta_h / sh;

    (term_l * term_l + term_c * term_c + term_h * term_h + rt * term_c * term_h).sqrt()
}
