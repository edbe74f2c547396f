//! The conversions between coordinate systems.
//!
//! Conversion is organized as one function per hop along the path from sRGB
//! channels to the target coordinates, with the composite paths assembled in
//! the sibling transform module. Rectangular hops are matrix/vector
//! multiplications or componentwise curves. Polar hops produce hue in
//! radians; scaling hue to degrees happens once, at the boundary of the
//! transform module.

use crate::core::space::WhitePoint;
use crate::Float;

/// Multiply the 3 by 3 matrix and 3-element vector with each other.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[2].mul_add(vector[2], row1[0].mul_add(vector[0], row1[1] * vector[1])),
        row2[2].mul_add(vector[2], row2[0].mul_add(vector[0], row2[1] * vector[1])),
        row3[2].mul_add(vector[2], row3[0].mul_add(vector[0], row3[1] * vector[1])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// 16-bit channels

/// Scale 8-bit channels up to this crate's 16-bit channels.
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [u16; 3] {
    // 0x0101 replicates the byte, so 0xff becomes 0xffff.
    [
        u16::from(r) * 0x0101,
        u16::from(g) * 0x0101,
        u16::from(b) * 0x0101,
    ]
}

/// Scale 16-bit channels down to 8-bit channels, rounding to nearest.
pub(crate) fn to_24bit(channels: &[u16; 3]) -> [u8; 3] {
    let scale = |c: u16| ((u32::from(c) + 128) / 257) as u8;
    [scale(channels[0]), scale(channels[1]), scale(channels[2])]
}

/// Scale 16-bit channels to unit-range floating point coordinates.
pub(crate) fn to_unit(channels: &[u16; 3]) -> [Float; 3] {
    let scale = |c: u16| Float::from(c) / 65_535.0;
    [scale(channels[0]), scale(channels[1]), scale(channels[2])]
}

/// Quantize unit-range coordinates to 16-bit channels. The coordinates must
/// already be in gamut.
pub(crate) fn from_unit(value: &[Float; 3]) -> [u16; 3] {
    let scale = |c: Float| (c * 65_535.0).round() as u16;
    [scale(value[0]), scale(value[1]), scale(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// sRGB and XYZ

/// Convert coordinates for gamma-corrected sRGB to linear sRGB.
pub(crate) fn srgb_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates for linear sRGB to gamma-corrected sRGB.
pub(crate) fn linear_srgb_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.003_130_8 {
            value * 12.92
        } else {
            (magnitude.powf(1.0 / 2.4).mul_add(1.055, -0.055)).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// Convert coordinates for linear sRGB to XYZ.
pub(crate) fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

/// Convert coordinates for XYZ to linear sRGB.
pub(crate) fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------
// XYZ and Lab

pub(crate) const EPSILON: Float = 216.0 / 24389.0;
pub(crate) const KAPPA: Float = 24389.0 / 27.0;

/// Convert coordinates for XYZ to Lab relative to the given white point.
pub(crate) fn xyz_to_lab(value: &[Float; 3], white: &WhitePoint) -> [Float; 3] {
    fn f(value: Float) -> Float {
        if value > EPSILON {
            value.cbrt()
        } else {
            (KAPPA * value + 16.0) / 116.0
        }
    }

    let white = white.coordinates();
    let fx = f(value[0] / white[0]);
    let fy = f(value[1] / white[1]);
    let fz = f(value[2] / white[2]);

    [
        116.0 * fy - 16.0,
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    ]
}

/// Convert coordinates for Lab to XYZ relative to the given white point.
pub(crate) fn lab_to_xyz(value: &[Float; 3], white: &WhitePoint) -> [Float; 3] {
    fn finv(value: Float) -> Float {
        let cubed = value * value * value;
        if cubed > EPSILON {
            cubed
        } else {
            (116.0 * value - 16.0) / KAPPA
        }
    }

    let white = white.coordinates();
    let fy = (value[0] + 16.0) / 116.0;
    let fx = value[1] / 500.0 + fy;
    let fz = fy - value[2] / 200.0;

    let y = if value[0] > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        value[0] / KAPPA
    };

    [finv(fx) * white[0], y * white[1], finv(fz) * white[2]]
}

// --------------------------------------------------------------------------------------------------------------------
// Lab and LCh

/// Convert coordinates for Lab to LCh. The resulting hue is in radians.
pub(crate) fn lab_to_lch(value: &[Float; 3]) -> [Float; 3] {
    [
        value[0],
        value[1].hypot(value[2]),
        value[2].atan2(value[1]),
    ]
}

/// Convert coordinates for LCh, with hue in radians, to Lab.
pub(crate) fn lch_to_lab(value: &[Float; 3]) -> [Float; 3] {
    [
        value[0],
        value[1] * value[2].cos(),
        value[1] * value[2].sin(),
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// sRGB and HSL

/// Convert coordinates for gamma-corrected sRGB to HSL.
///
/// The resulting hue is in degrees and not-a-number for achromatic colors;
/// saturation and lightness are unit-range fractions.
pub(crate) fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return [Float::NAN, 0.0, lightness];
    }

    let saturation = if lightness <= 0.0 || 1.0 <= lightness {
        0.0
    } else {
        (max - lightness) / lightness.min(1.0 - lightness)
    };

    let mut hue = 60.0
        * if max == r {
            (g - b) / delta
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
    if hue < 0.0 {
        hue += 360.0;
    }

    [hue, saturation, lightness]
}

/// Convert coordinates for HSL, with hue in degrees and saturation and
/// lightness as unit-range fractions, to gamma-corrected sRGB.
pub(crate) fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, lightness] = *value;
    let hue = if hue.is_nan() { 0.0 } else { hue.rem_euclid(360.0) };
    let a = saturation * lightness.min(1.0 - lightness);

    let f = |n: Float| -> Float {
        let k = (n + hue / 30.0) % 12.0;
        lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };

    [f(0.0), f(8.0), f(4.0)]
}

// --------------------------------------------------------------------------------------------------------------------
// XYZ, Luv, LCh(uv), and HSLuv

const REF_U: Float = 0.19783000664283;
const REF_V: Float = 0.46831999493879;

/// Convert a unit-range Y tristimulus value to CIE lightness.
fn y_to_l(y: Float) -> Float {
    if y <= EPSILON {
        y * KAPPA
    } else {
        116.0 * y.cbrt() - 16.0
    }
}

/// Convert CIE lightness to a unit-range Y tristimulus value.
fn l_to_y(l: Float) -> Float {
    if l <= 8.0 {
        l / KAPPA
    } else {
        let fy = (l + 16.0) / 116.0;
        fy * fy * fy
    }
}

/// Convert coordinates for XYZ to CIE 1976 L*u*v*.
pub(crate) fn xyz_to_luv(value: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = *value;
    let l = y_to_l(y);
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let divider = x + 15.0 * y + 3.0 * z;
    let var_u = 4.0 * x / divider;
    let var_v = 9.0 * y / divider;

    [l, 13.0 * l * (var_u - REF_U), 13.0 * l * (var_v - REF_V)]
}

/// Convert coordinates for CIE 1976 L*u*v* to XYZ.
pub(crate) fn luv_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [l, u, v] = *value;
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let var_u = u / (13.0 * l) + REF_U;
    let var_v = v / (13.0 * l) + REF_V;
    let y = l_to_y(l);
    let x = -(9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
    let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);

    [x, y, z]
}

/// Convert coordinates for L*u*v* to its cylindrical form. The resulting hue
/// is in radians.
pub(crate) fn luv_to_lchuv(value: &[Float; 3]) -> [Float; 3] {
    let [l, u, v] = *value;
    let chroma = u.hypot(v);
    let hue = if chroma < 1e-8 { 0.0 } else { v.atan2(u) };

    [l, chroma, hue]
}

/// Convert coordinates for cylindrical L*u*v*, with hue in radians, back to
/// the rectangular form.
pub(crate) fn lchuv_to_luv(value: &[Float; 3]) -> [Float; 3] {
    let [l, chroma, hue] = *value;

    [l, chroma * hue.cos(), chroma * hue.sin()]
}

/// Compute the slope/intercept lines bounding the sRGB gamut in the
/// chroma/hue plane at the given lightness.
fn gamut_bounds(l: Float) -> [(Float, Float); 6] {
    let sub1 = (l + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut bounds = [(0.0, 0.0); 6];
    for (channel, row) in XYZ_TO_LINEAR_SRGB.iter().enumerate() {
        let [m1, m2, m3] = *row;
        for t in 0..2 {
            let tf = t as Float;
            let top1 = (284_517.0 * m1 - 94_839.0 * m3) * sub2;
            let top2 = (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1) * l * sub2
                - 769_860.0 * tf * l;
            let bottom = (632_260.0 * m3 - 126_452.0 * m2) * sub2 + 126_452.0 * tf;
            bounds[channel * 2 + t] = (top1 / bottom, top2 / bottom);
        }
    }

    bounds
}

/// Compute the length of the ray from the origin at the given angle until it
/// intersects the line, or `None` if the intersection lies behind the origin.
fn ray_until_intersect(theta: Float, line: (Float, Float)) -> Option<Float> {
    let (slope, intercept) = line;
    let length = intercept / (theta.sin() - slope * theta.cos());
    (length >= 0.0).then_some(length)
}

/// Compute the largest in-gamut chroma at the given lightness and hue, with
/// hue in radians.
fn max_chroma(l: Float, hue: Float) -> Float {
    gamut_bounds(l)
        .into_iter()
        .filter_map(|line| ray_until_intersect(hue, line))
        .fold(Float::MAX, Float::min)
}

/// Convert coordinates for cylindrical L*u*v*, with hue in radians, to
/// HSLuv. The resulting hue also is in radians; saturation and lightness are
/// percentages.
pub(crate) fn lchuv_to_hsluv(value: &[Float; 3]) -> [Float; 3] {
    let [l, chroma, hue] = *value;
    if l > 99.999_999_9 {
        return [hue, 0.0, 100.0];
    } else if l < 1e-8 {
        return [hue, 0.0, 0.0];
    }

    [hue, chroma / max_chroma(l, hue) * 100.0, l]
}

/// Convert coordinates for HSLuv, with hue in radians and saturation and
/// lightness as percentages, to cylindrical L*u*v* with hue in radians.
pub(crate) fn hsluv_to_lchuv(value: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, l] = *value;
    if l > 99.999_999_9 {
        return [100.0, 0.0, hue];
    } else if l < 1e-8 {
        return [0.0, 0.0, hue];
    }

    [l, max_chroma(l, hue) / 100.0 * saturation, hue]
}
