use crate::Float;

/// The color spaces for inspecting and transforming colors.
///
/// Every color is stored as (gamut-mapped) sRGB. The variants of this
/// enumeration name the coordinate systems a color can be read in and written
/// back from. [`Lab`](ColorSpace::Lab) and [`Lch`](ColorSpace::Lch) are the
/// CIE 1976 L\*a\*b\* space and its cylindrical form, both relative to a
/// configurable white point. [`Hsl`](ColorSpace::Hsl) is the familiar
/// hue/saturation/lightness view of sRGB and [`Hsluv`](ColorSpace::Hsluv) is
/// its perceptually uniform cousin, which replaces HSL's distorted lightness
/// with CIE lightness while keeping the cylindrical interface.
///
/// Coordinate conventions differ per space:
///
///   * Lab: L in 0..=100, a and b unbounded in practice;
///   * LCh: L in 0..=100, C in 0..=100, h in degrees 0..360;
///   * HSL: h in degrees 0..360, S and L as percentages 0..=100;
///   * HSLuv: h in degrees 0..360, S and L as percentages 0..=100.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// The CIE 1976 L*a*b* color space, rectangular.
    Lab,
    /// The cylindrical form of CIE 1976 L*a*b*, with chroma and hue.
    Lch,
    /// Hue, saturation, and lightness over sRGB.
    Hsl,
    /// The HSLuv color space, a perceptually uniform take on HSL.
    Hsluv,
}

impl ColorSpace {
    /// Determine whether this color space is polar, i.e., has a hue channel.
    /// Amongst the supported spaces, only Lab is rectangular.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub const fn is_polar(&self) -> bool {
        !matches!(*self, Self::Lab)
    }

    /// Determine the index of the hue channel for this color space, if it has
    /// one.
    ///
    /// LCh stores its hue last, whereas HSL and HSLuv store it first. Lab has
    /// no hue and yields `None`.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub const fn hue_index(&self) -> Option<usize> {
        match *self {
            Self::Lab => None,
            Self::Lch => Some(2),
            Self::Hsl | Self::Hsluv => Some(0),
        }
    }
}

impl core::fmt::Display for ColorSpace {
    /// Format a human-readable name for this color space.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match *self {
            Self::Lab => "Lab",
            Self::Lch => "LCh",
            Self::Hsl => "HSL",
            Self::Hsluv => "HSLuv",
        })
    }
}

// ====================================================================================================================

/// A reference white point as a tristimulus XYZ triple normalized to Y = 1.
///
/// The CIE standard illuminants below cover the white points in common use.
/// Lab and LCh coordinates are relative to a white point, which defaults to
/// [`WhitePoint::D65`], the white point of sRGB itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WhitePoint([Float; 3]);

impl WhitePoint {
    /// Standard illuminant D50, horizon light.
    pub const D50: Self = Self([0.96422, 1.0, 0.82521]);
    /// Standard illuminant D55, mid-morning daylight.
    pub const D55: Self = Self([0.95682, 1.0, 0.92149]);
    /// Standard illuminant D65, noon daylight and the sRGB reference white.
    pub const D65: Self = Self([0.95047, 1.0, 1.08883]);
    /// Standard illuminant D75, north sky daylight.
    pub const D75: Self = Self([0.94972, 1.0, 1.22638]);

    /// Instantiate a new white point from its tristimulus values.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self([x, y, z])
    }

    /// Access the tristimulus values of this white point.
    #[inline]
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub const fn coordinates(&self) -> &[Float; 3] {
        &self.0
    }
}

impl Default for WhitePoint {
    /// Yield [`WhitePoint::D65`], the sRGB reference white.
    fn default() -> Self {
        Self::D65
    }
}

impl AsRef<[Float; 3]> for WhitePoint {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}
