//! The high-level API for inspecting and transforming colors.

use crate::core::{
    clip, delta_e_2000, format, from_24bit, from_triple, parse, relative_luminance, to_24bit,
    to_contrast_ratio, to_triple, ChannelValue, ColorSpace, HexFormat, WhitePoint,
};
use crate::error::ColorFormatError;
use crate::Float;

/// A color.
///
/// Every color is an sRGB color with 16 bits per channel, the resolution of
/// twelve-digit hexadecimal notation. That makes colors compact, hashable,
/// and comparable for exact equality. All other coordinate systems are views:
/// a color can be read as a [Lab](ColorSpace::Lab), [LCh](ColorSpace::Lch),
/// [HSL](ColorSpace::Hsl), or [HSLuv](ColorSpace::Hsluv) triple and rewritten
/// from a modified triple. Writing back gamut-clips and quantizes, so the
/// result is a valid color again.
///
/// The struct provides methods for:
///
///   * reading triples and individual channels, e.g., [`lab`](Self::lab) and
///     [`lch_hue`](Self::lch_hue);
///   * transforming colors through arbitrary triple functions, e.g.,
///     [`map`](Self::map) and [`map_channel`](Self::map_channel);
///   * quantifying colors, e.g., [`luminance`](Self::luminance),
///     [`contrast_ratio`](Self::contrast_ratio), and
///     [`distance`](Self::distance);
///   * deriving new colors, e.g., [`tint_ratio`](Self::tint_ratio),
///     [`rotation`](Self::rotation), and [`pastel`](Self::pastel).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    channels: [u16; 3],
}

impl Color {
    /// The Lab lightness below which a color counts as dark.
    pub const LIGHT_THRESHOLD: Float = 65.0;

    /// Instantiate a new color from its three 16-bit sRGB channels.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self {
            channels: [r, g, b],
        }
    }

    /// Instantiate a new color from its three 8-bit sRGB channels, scaling
    /// them to 16 bits by byte replication.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self {
            channels: from_24bit(r, g, b),
        }
    }

    /// Instantiate a new color from the given triple in the given color
    /// space, relative to the default D65 white point.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn from_triple(space: ColorSpace, triple: [Float; 3]) -> Self {
        Self::from_triple_with(space, &WhitePoint::default(), triple)
    }

    /// Instantiate a new color from the given triple in the given color
    /// space, relative to the given white point.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn from_triple_with(space: ColorSpace, white: &WhitePoint, triple: [Float; 3]) -> Self {
        Self {
            channels: from_triple(space, white, &triple),
        }
    }

    /// Instantiate a new color from its Lab coordinates.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn from_lab(l: Float, a: Float, b: Float) -> Self {
        Self::from_triple(ColorSpace::Lab, [l, a, b])
    }

    /// Instantiate a new color from its Lab coordinates relative to the
    /// given white point.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn from_lab_with(white: &WhitePoint, l: Float, a: Float, b: Float) -> Self {
        Self::from_triple_with(ColorSpace::Lab, white, [l, a, b])
    }

    /// Instantiate a new color from its LCh coordinates, with hue in
    /// degrees.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn from_lch(l: Float, c: Float, h: Float) -> Self {
        Self::from_triple(ColorSpace::Lch, [l, c, h])
    }

    /// Instantiate a new color from its HSL coordinates, with hue in degrees
    /// and saturation and lightness as percentages.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn from_hsl(h: Float, s: Float, l: Float) -> Self {
        Self::from_triple(ColorSpace::Hsl, [h, s, l])
    }

    /// Instantiate a new color from its HSLuv coordinates, with hue in
    /// degrees and saturation and lightness as percentages.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn from_hsluv(h: Float, s: Float, l: Float) -> Self {
        Self::from_triple(ColorSpace::Hsluv, [h, s, l])
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access this color's 16-bit sRGB channels.
    #[inline]
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub const fn channels(&self) -> &[u16; 3] {
        &self.channels
    }

    /// Access this color's channels scaled down to 8 bits, rounding to
    /// nearest.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.channels)
    }

    /// Read this color as a triple in the given color space, relative to the
    /// default D65 white point.
    ///
    /// Hues are degrees in `0..360`; the hue of achromatic colors is zero.
    /// LCh chroma is clamped to `0..=100`; HSL and HSLuv saturation and
    /// lightness are percentages.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn triple(&self, space: ColorSpace) -> [Float; 3] {
        self.triple_with(space, &WhitePoint::default())
    }

    /// Read this color as a triple in the given color space, relative to the
    /// given white point. The white point only matters for Lab and LCh.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn triple_with(&self, space: ColorSpace, white: &WhitePoint) -> [Float; 3] {
        to_triple(space, white, &self.channels)
    }

    /// Read this color as a Lab triple.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn lab(&self) -> [Float; 3] {
        self.triple(ColorSpace::Lab)
    }

    /// Read this color as a Lab triple relative to the given white point.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn lab_with(&self, white: &WhitePoint) -> [Float; 3] {
        self.triple_with(ColorSpace::Lab, white)
    }

    /// Read this color as an LCh triple.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn lch(&self) -> [Float; 3] {
        self.triple(ColorSpace::Lch)
    }

    /// Read this color as an LCh triple relative to the given white point.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn lch_with(&self, white: &WhitePoint) -> [Float; 3] {
        self.triple_with(ColorSpace::Lch, white)
    }

    /// Read this color as an HSL triple.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn hsl(&self) -> [Float; 3] {
        self.triple(ColorSpace::Hsl)
    }

    /// Read this color as an HSLuv triple.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn hsluv(&self) -> [Float; 3] {
        self.triple(ColorSpace::Hsluv)
    }

    /// The Lab lightness L*.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn lab_lightness(&self) -> Float {
        self.lab()[0]
    }

    /// The Lab a* coordinate, green to red.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn lab_a(&self) -> Float {
        self.lab()[1]
    }

    /// The Lab b* coordinate, blue to yellow.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn lab_b(&self) -> Float {
        self.lab()[2]
    }

    /// The LCh lightness.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn lch_lightness(&self) -> Float {
        self.lch()[0]
    }

    /// The LCh chroma, clamped to `0..=100`.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn lch_chroma(&self) -> Float {
        self.lch()[1]
    }

    /// The LCh hue in degrees.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn lch_hue(&self) -> Float {
        self.lch()[2]
    }

    /// The HSL hue in degrees.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn hsl_hue(&self) -> Float {
        self.hsl()[0]
    }

    /// The HSL saturation as a percentage.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn hsl_saturation(&self) -> Float {
        self.hsl()[1]
    }

    /// The HSL lightness as a percentage.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn hsl_lightness(&self) -> Float {
        self.hsl()[2]
    }

    /// The HSLuv hue in degrees.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn hsluv_hue(&self) -> Float {
        self.hsluv()[0]
    }

    /// The HSLuv saturation as a percentage.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn hsluv_saturation(&self) -> Float {
        self.hsluv()[1]
    }

    /// The HSLuv lightness as a percentage.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn hsluv_lightness(&self) -> Float {
        self.hsluv()[2]
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Transform this color by applying the function to its triple in the
    /// given color space, relative to the default D65 white point.
    ///
    /// ```
    /// # use tinct::{Color, ColorSpace};
    /// # use tinct::error::ColorFormatError;
    /// let coral: Color = "#ff7f50".parse()?;
    /// let muted = coral.map(ColorSpace::Lch, |[l, c, h]| [l, c / 2.0, h]);
    /// assert!(muted.lch_chroma() < coral.lch_chroma());
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn map(
        &self,
        space: ColorSpace,
        update: impl FnOnce([Float; 3]) -> [Float; 3],
    ) -> Self {
        self.map_with(space, &WhitePoint::default(), update)
    }

    /// Transform this color by applying the function to its triple in the
    /// given color space, relative to the given white point.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn map_with(
        &self,
        space: ColorSpace,
        white: &WhitePoint,
        update: impl FnOnce([Float; 3]) -> [Float; 3],
    ) -> Self {
        Self {
            channels: from_triple(space, white, &update(to_triple(space, white, &self.channels))),
        }
    }

    /// Transform this color's Lab triple.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn map_lab(&self, update: impl FnOnce([Float; 3]) -> [Float; 3]) -> Self {
        self.map(ColorSpace::Lab, update)
    }

    /// Transform this color's Lab triple relative to the given white point.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn map_lab_with(
        &self,
        white: &WhitePoint,
        update: impl FnOnce([Float; 3]) -> [Float; 3],
    ) -> Self {
        self.map_with(ColorSpace::Lab, white, update)
    }

    /// Transform this color's LCh triple.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn map_lch(&self, update: impl FnOnce([Float; 3]) -> [Float; 3]) -> Self {
        self.map(ColorSpace::Lch, update)
    }

    /// Transform this color's HSL triple.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn map_hsl(&self, update: impl FnOnce([Float; 3]) -> [Float; 3]) -> Self {
        self.map(ColorSpace::Hsl, update)
    }

    /// Transform this color's HSLuv triple.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn map_hsluv(&self, update: impl FnOnce([Float; 3]) -> [Float; 3]) -> Self {
        self.map(ColorSpace::Hsluv, update)
    }

    /// Transform one channel of this color's triple in the given color
    /// space, leaving the other two channels alone.
    ///
    /// # Panics
    ///
    /// This method panics if the index is larger than two.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn map_channel(
        &self,
        space: ColorSpace,
        index: usize,
        value: impl Into<ChannelValue>,
    ) -> Self {
        assert!(index < 3, "channel index {} is out of bounds", index);

        let value = value.into();
        self.map(space, |mut triple| {
            triple[index] = value.apply(triple[index]);
            triple
        })
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine the WCAG 2.x relative luminance of this color, between 0
    /// for black and 1 for white.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn luminance(&self) -> Float {
        relative_luminance(&self.channels)
    }

    /// Determine the WCAG 2.x contrast ratio between this color and the
    /// other color, between 1 and 21.
    ///
    /// ```
    /// # use tinct::Color;
    /// let ratio = Color::new(0, 0, 0).contrast_ratio(&Color::new(0xffff, 0xffff, 0xffff));
    /// assert!((ratio - 21.0).abs() < 1e-9);
    /// ```
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn contrast_ratio(&self, other: &Self) -> Float {
        to_contrast_ratio(self.luminance(), other.luminance())
    }

    /// Determine the perceptual distance ΔE*00 between this color and the
    /// other color, computed with the CIEDE2000 formula over Lab.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn distance(&self, other: &Self) -> Float {
        delta_e_2000(&self.lab(), &other.lab())
    }

    /// Determine whether this color is light, i.e., has a Lab lightness
    /// above [`Color::LIGHT_THRESHOLD`].
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn is_light(&self) -> bool {
        self.is_light_threshold(Self::LIGHT_THRESHOLD)
    }

    /// Determine whether this color's Lab lightness exceeds the given
    /// threshold.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn is_light_threshold(&self, threshold: Float) -> bool {
        self.lab_lightness() > threshold
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Lighten this color by adding the given amount to its Lab lightness.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn lighten(&self, amount: Float) -> Self {
        self.map_lab(|[l, a, b]| [l + amount, a, b])
    }

    /// Darken this color by subtracting the given amount from its Lab
    /// lightness.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn darken(&self, amount: Float) -> Self {
        self.lighten(-amount)
    }

    /// Tint this color until it clears the given contrast ratio against the
    /// other color.
    ///
    /// The tint moves away from the other color in half-unit steps of Lab
    /// lightness, darkening against a light color and lightening against a
    /// dark one, and stops as soon as the contrast ratio strictly exceeds
    /// the requested ratio. If the ratio is out of reach even at the gamut
    /// boundary, the result is the closest boundary color.
    ///
    /// ```
    /// # use tinct::Color;
    /// let white = Color::new(0xffff, 0xffff, 0xffff);
    /// let gray = Color::from_24bit(0xaa, 0xaa, 0xaa);
    /// let tinted = gray.tint_ratio(&white, 4.5);
    /// assert!(tinted.contrast_ratio(&white) > 4.5);
    /// ```
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn tint_ratio(&self, other: &Self, ratio: Float) -> Self {
        let step = if other.is_light() { -0.5 } else { 0.5 };

        crate::iterate::converge(
            self.clone(),
            |color| color.lighten(step),
            |color| color.contrast_ratio(other) > ratio,
        )
    }

    /// Derive the colors at all whole hue rotations of this color by the
    /// given interval, in the given color space.
    ///
    /// The rotations are 0, `interval`, twice `interval`, and so on up to
    /// but excluding 360 degrees, so the result always starts with this
    /// color itself. For a non-positive interval, or for
    /// [`ColorSpace::Lab`], which has no hue, the result is just this color.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn rotation(&self, space: ColorSpace, interval: Float) -> Vec<Self> {
        let Some(index) = space.hue_index() else {
            return vec![self.clone()];
        };
        if interval <= 0.0 {
            return vec![self.clone()];
        }

        let mut colors = Vec::new();
        let mut rotation = 0.0;
        while rotation < 360.0 {
            colors.push(self.map(space, |mut triple| {
                triple[index] += rotation;
                triple
            }));
            rotation += interval;
        }

        colors
    }

    /// Derive the colors at all whole LCh hue rotations by the given
    /// interval.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn rotation_lch(&self, interval: Float) -> Vec<Self> {
        self.rotation(ColorSpace::Lch, interval)
    }

    /// Derive the colors at all whole HSL hue rotations by the given
    /// interval.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn rotation_hsl(&self, interval: Float) -> Vec<Self> {
        self.rotation(ColorSpace::Hsl, interval)
    }

    /// Derive the colors at all whole HSLuv hue rotations by the given
    /// interval.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn rotation_hsluv(&self, interval: Float) -> Vec<Self> {
        self.rotation(ColorSpace::Hsluv, interval)
    }

    /// Derive the complementary color, i.e., this color rotated halfway
    /// around the HSLuv hue circle.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn complementary(&self) -> Self {
        self.map_hsluv(|[h, s, l]| [h + 180.0, s, l])
    }

    /// Derive a pastel version of this color, i.e., with HSL saturation
    /// scaled by 0.9 and lightness by 1.1.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn pastel(&self) -> Self {
        self.pastel_with(0.9, 1.1)
    }

    /// Derive a pastel version of this color with the given multipliers for
    /// HSL saturation and lightness.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn pastel_with(&self, saturation: Float, lightness: Float) -> Self {
        self.map_hsl(|[h, s, l]| [h, s * saturation, l * lightness])
    }

    /// Reinterpret this color's Lab coordinates under a different white
    /// point, i.e., read the triple relative to `from` and write it back
    /// relative to `to`.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn change_white_point(&self, from: &WhitePoint, to: &WhitePoint) -> Self {
        Self::from_triple_with(ColorSpace::Lab, to, self.lab_with(from))
    }

    /// Create an interpolator between this color and the other color.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn interpolate(&self, other: &Self) -> Interpolator {
        Interpolator::new(self, other)
    }

    /// Format this color in hashed hexadecimal notation with the given
    /// format preference.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn to_hex_format(&self, hex: HexFormat) -> String {
        struct Hexed<'a>(&'a [u16; 3], HexFormat);

        impl core::fmt::Display for Hexed<'_> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                format(self.0, self.1, f)
            }
        }

        Hexed(&self.channels, hex).to_string()
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl core::str::FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its hashed hexadecimal representation, with
    /// one, two, or four digits per channel.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|channels| Self { channels })
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl core::fmt::Display for Color {
    /// Format this color in hashed hexadecimal notation.
    ///
    /// The default format shortens to two digits per channel where that
    /// loses no information; the alternate `{:#}` format always uses the
    /// four-digit long form.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let hex = if f.alternate() {
            HexFormat::Long
        } else {
            HexFormat::Shortened
        };
        format(&self.channels, hex, f)
    }
}

impl core::fmt::Debug for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Color({})", self)
    }
}

// ====================================================================================================================

/// An interpolator between two colors.
///
/// The interpolator lerps the gamma-corrected sRGB channels, which matches
/// how most design tools blend colors.
#[derive(Clone, Debug)]
pub struct Interpolator {
    start: [Float; 3],
    stop: [Float; 3],
}

impl Interpolator {
    fn new(start: &Color, stop: &Color) -> Self {
        let scale = |channels: &[u16; 3]| {
            [
                Float::from(channels[0]) / 65_535.0,
                Float::from(channels[1]) / 65_535.0,
                Float::from(channels[2]) / 65_535.0,
            ]
        };

        Self {
            start: scale(start.channels()),
            stop: scale(stop.channels()),
        }
    }

    /// Compute the color at the given fraction, with 0 mapping to the start
    /// color and 1 to the stop color. Fractions outside the unit range are
    /// clamped.
    #[must_use = "the only reason to invoke method is to access the returned value"]
    pub fn at(&self, fraction: Float) -> Color {
        let fraction = fraction.clamp(0.0, 1.0);
        let lerp = |index: usize| {
            (self.stop[index] - self.start[index]).mul_add(fraction, self.start[index])
        };
        let srgb = clip(&[lerp(0), lerp(1), lerp(2)]);

        Color::new(
            (srgb[0] * 65_535.0).round() as u16,
            (srgb[1] * 65_535.0).round() as u16,
            (srgb[2] * 65_535.0).round() as u16,
        )
    }
}

/// Compute a gradient of `steps` colors between the two colors.
///
/// Without `include_ends`, the gradient comprises `steps` evenly spaced
/// interior colors, at fractions k/(steps + 1), so neither end color appears
/// in the result. With `include_ends`, the first and last colors are the
/// literal end colors and the remaining `steps - 2` colors are evenly spaced
/// between them.
#[must_use = "the only reason to invoke function is to access the returned value"]
pub fn gradient(steps: usize, start: &Color, stop: &Color, include_ends: bool) -> Vec<Color> {
    if steps == 0 {
        return Vec::new();
    }

    let interpolator = start.interpolate(stop);
    let mut colors = Vec::with_capacity(steps);

    if include_ends {
        colors.push(start.clone());
        if 2 <= steps {
            let denominator = (steps - 1) as Float;
            for step in 1..steps - 1 {
                colors.push(interpolator.at(step as Float / denominator));
            }
            colors.push(stop.clone());
        }
    } else {
        let denominator = (steps + 1) as Float;
        for step in 1..=steps {
            colors.push(interpolator.at(step as Float / denominator));
        }
    }

    colors
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{gradient, Color};
    use crate::assert_close_enough;
    use crate::core::assert_within;
    use crate::error::ColorFormatError;
    use crate::{ColorSpace, Float, HexFormat, WhitePoint};

    #[test]
    fn test_notation() -> Result<(), ColorFormatError> {
        let coral: Color = "#ff7f50".parse()?;
        assert_eq!(coral.to_24bit(), [0xff, 0x7f, 0x50]);
        assert_eq!(format!("{}", coral), "#ff7f50");
        assert_eq!(coral.to_hex_format(HexFormat::Long), "#ffff7f7f5050");

        let white = Color::try_from("#fff")?;
        assert_eq!(white, Color::new(0xffff, 0xffff, 0xffff));
        assert_eq!(format!("{}", white), "#ffffff");
        assert_eq!(white.to_hex_format(HexFormat::Shortened), "#ffffff");
        assert_eq!(format!("{:?}", white), "Color(#ffffff)");

        Ok(())
    }

    #[test]
    fn test_channel_getters() -> Result<(), ColorFormatError> {
        let coral: Color = "#ff7f50".parse()?;

        let [l, a, b] = coral.lab();
        assert_close_enough!(coral.lab_lightness(), l);
        assert_close_enough!(coral.lab_a(), a);
        assert_close_enough!(coral.lab_b(), b);

        // Chroma and hue agree between direct getters and the full triple.
        let [_, c, h] = coral.lch();
        assert_close_enough!(coral.lch_chroma(), c);
        assert_close_enough!(coral.lch_hue(), h);
        assert!((0.0..360.0).contains(&h));

        let [hue, saturation, lightness] = coral.hsl();
        assert_close_enough!(coral.hsl_hue(), hue);
        assert_close_enough!(coral.hsl_saturation(), saturation);
        assert_close_enough!(coral.hsl_lightness(), lightness);
        assert!((0.0..=100.0).contains(&saturation));

        assert!((0.0..=100.0).contains(&coral.hsluv_saturation()));
        assert!((0.0..=100.0).contains(&coral.hsluv_lightness()));

        Ok(())
    }

    #[test]
    fn test_map() -> Result<(), ColorFormatError> {
        let coral: Color = "#ff7f50".parse()?;

        // The identity transform reproduces the color exactly.
        for space in [
            ColorSpace::Lab,
            ColorSpace::Lch,
            ColorSpace::Hsl,
            ColorSpace::Hsluv,
        ] {
            assert_eq!(coral.map(space, |triple| triple), coral);
        }

        let muted = coral.map_lch(|[l, c, h]| [l, c / 2.0, h]);
        assert!(muted.lch_chroma() < coral.lch_chroma());
        assert_within!(muted.lch_lightness(), coral.lch_lightness(), 0.1);

        let capped = coral.map_channel(ColorSpace::Lch, 1, 10.0);
        assert_within!(capped.lch_chroma(), 10.0, 0.1);

        Ok(())
    }

    #[test]
    #[should_panic = "channel index 3 is out of bounds"]
    fn test_map_channel_bounds() {
        let _ = Color::new(0, 0, 0).map_channel(ColorSpace::Lab, 3, 0.0);
    }

    #[test]
    fn test_metrics() {
        let black = Color::new(0, 0, 0);
        let white = Color::new(0xffff, 0xffff, 0xffff);

        assert_within!(black.luminance(), 0.0, 1e-9);
        assert_within!(white.luminance(), 1.0, 1e-9);
        assert_within!(black.contrast_ratio(&white), 21.0, 1e-9);
        assert_within!(white.contrast_ratio(&black), 21.0, 1e-9);

        assert_within!(black.distance(&black), 0.0, 1e-9);
        assert!(black.distance(&white) > 99.0);

        assert!(white.is_light());
        assert!(!black.is_light());
        assert!(black.is_light_threshold(-1.0));
    }

    #[test]
    fn test_lighten_darken() -> Result<(), ColorFormatError> {
        let coral: Color = "#ff7f50".parse()?;

        assert!(coral.darken(20.0).lab_lightness() < coral.lab_lightness());
        assert!(coral.lighten(20.0).lab_lightness() > coral.lab_lightness());
        assert_within!(
            coral.darken(20.0).lab_lightness(),
            coral.lab_lightness() - 20.0,
            0.1,
        );

        Ok(())
    }

    #[test]
    fn test_tint_ratio() -> Result<(), ColorFormatError> {
        let white = Color::new(0xffff, 0xffff, 0xffff);
        let black = Color::new(0, 0, 0);
        let gray = Color::from_24bit(0xaa, 0xaa, 0xaa);

        let on_white = gray.tint_ratio(&white, 4.5);
        assert!(on_white.contrast_ratio(&white) > 4.5);
        assert!(on_white.lab_lightness() < gray.lab_lightness());

        let on_black = gray.tint_ratio(&black, 7.0);
        assert!(on_black.contrast_ratio(&black) > 7.0);
        assert!(on_black.lab_lightness() > gray.lab_lightness());

        // An already sufficient color passes through unchanged.
        assert_eq!(black.tint_ratio(&white, 4.5), black);

        // An unreachable ratio stops at the gamut boundary.
        let best = gray.tint_ratio(&white, 25.0);
        assert!(best.contrast_ratio(&white) > 20.0);

        // Tinting against itself darkens the light gray until it clears
        // the ratio.
        let light_gray: Color = "#eeeeee".parse()?;
        let tinted = light_gray.tint_ratio(&light_gray, 4.5);
        assert!(tinted.contrast_ratio(&light_gray) > 4.5);
        assert!(tinted.lab_lightness() < light_gray.lab_lightness());

        Ok(())
    }

    #[test]
    fn test_construction() {
        let color = Color::from_lab(50.0, 30.0, 40.0);
        let [l, a, b] = color.lab();
        assert_within!(l, 50.0, 0.1);
        assert_within!(a, 30.0, 0.1);
        assert_within!(b, 40.0, 0.1);

        let color = Color::from_hsluv(120.0, 50.0, 50.0);
        assert_within!(color.hsluv_hue(), 120.0, 0.1);
        assert_within!(color.hsluv_saturation(), 50.0, 0.1);
        assert_within!(color.hsluv_lightness(), 50.0, 0.1);
    }

    #[test]
    fn test_rotation() -> Result<(), ColorFormatError> {
        let coral: Color = "#ff7f50".parse()?;

        let wheel = coral.rotation_hsluv(60.0);
        assert_eq!(wheel.len(), 6);
        assert_eq!(wheel[0], coral);

        // Distance on the hue circle, since 350 and 10 are 20 degrees apart.
        let expected = (coral.hsluv_hue() + 60.0) % 360.0;
        let actual = wheel[1].hsluv_hue();
        let hue_gap = (actual - expected).abs();
        assert!(hue_gap.min(360.0 - hue_gap) < 0.1);

        // A full wheel from a seed with known hue lands on the exact stops.
        let seed = Color::from_hsluv(0.0, 50.0, 50.0);
        let stops = seed.rotation(ColorSpace::Hsluv, 60.0);
        assert_eq!(stops.len(), 6);
        for (index, color) in stops.iter().enumerate() {
            let expected = 60.0 * index as Float;
            let hue_gap = (color.hsluv_hue() - expected).abs();
            assert!(hue_gap.min(360.0 - hue_gap) < 0.1);
        }

        assert_eq!(coral.rotation(ColorSpace::Lab, 60.0), vec![coral.clone()]);
        assert_eq!(coral.rotation(ColorSpace::Hsl, 0.0), vec![coral.clone()]);
        assert_eq!(coral.rotation(ColorSpace::Hsl, 400.0), vec![coral.clone()]);

        Ok(())
    }

    #[test]
    fn test_pastel() -> Result<(), ColorFormatError> {
        let red: Color = "#f00".parse()?;
        let pastel = red.pastel();

        assert!(pastel.hsl_saturation() < red.hsl_saturation());
        assert!(pastel.hsl_lightness() > red.hsl_lightness());

        Ok(())
    }

    #[test]
    fn test_complementary() -> Result<(), ColorFormatError> {
        let coral: Color = "#ff7f50".parse()?;
        let complement = coral.complementary();

        let hue_gap = (complement.hsluv_hue() - coral.hsluv_hue()).abs();
        assert!((hue_gap.min(360.0 - hue_gap) - 180.0).abs() < 0.1);

        // The complement of the complement is the color itself, up to
        // quantization.
        assert!(complement.complementary().distance(&coral) < 0.1);

        Ok(())
    }

    #[test]
    fn test_white_point() -> Result<(), ColorFormatError> {
        let coral: Color = "#ff7f50".parse()?;

        // Reinterpreting under the same white point is the identity.
        assert_eq!(
            coral.change_white_point(&WhitePoint::D65, &WhitePoint::D65),
            coral
        );

        let warmer = coral.change_white_point(&WhitePoint::D50, &WhitePoint::D65);
        assert_ne!(warmer, coral);
        assert_within!(warmer.lab_lightness(), coral.lab_lightness(), 1.0);

        Ok(())
    }

    #[test]
    fn test_gradient() {
        let black = Color::new(0, 0, 0);
        let white = Color::new(0xffff, 0xffff, 0xffff);

        let interior = gradient(3, &black, &white, false);
        assert_eq!(interior.len(), 3);
        assert_ne!(interior[0], black);
        assert_ne!(interior[2], white);
        assert_eq!(interior[1], Color::new(0x8000, 0x8000, 0x8000));

        let full = gradient(5, &black, &white, true);
        assert_eq!(full.len(), 5);
        assert_eq!(full[0], black);
        assert_eq!(full[4], white);
        assert_eq!(full[2], Color::new(0x8000, 0x8000, 0x8000));

        assert_eq!(gradient(0, &black, &white, true), Vec::<Color>::new());
        assert_eq!(gradient(1, &black, &white, true), vec![black.clone()]);

        let interpolator = black.interpolate(&white);
        assert_eq!(interpolator.at(0.0), black);
        assert_eq!(interpolator.at(1.0), white);
        assert_eq!(interpolator.at(2.0), white);
    }
}
