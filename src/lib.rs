//! # Tinct
//!
//! Tinct provides a unified, space-agnostic interface for inspecting and
//! transforming colors across several perceptual and device color models:
//! CIE Lab, its polar form LCH, device-relative HSL, and the perceptually
//! uniform HSLuv. On top of the conversions it layers perceptual metrics
//! and an iterative convergence engine for contrast-driven tone search.
//!
//!
//! ## 1. Overview
//!
//! Tinct's main abstractions are:
//!
//!   * [`Color`] is an always-in-gamut sRGB value with a hashed hexadecimal
//!     canonical form. All operations take and return colors; intermediate
//!     triples in other spaces are transient values.
//!   * [`ColorSpace`] selects the working space for the generic transform
//!     framework: [`Color::map`] converts a color into the space's triple,
//!     applies a caller-supplied function, converts back, and clamps each
//!     RGB channel into gamut. Reading ([`Color::triple`]), writing
//!     ([`Color::map_channel`] with a [`ChannelValue`]), and construction
//!     ([`Color::from_lab`] and friends) all ride on that one conversion
//!     path.
//!   * The [`iterate`] module implements bounded fixpoint iteration, which
//!     [`Color::tint_ratio`] specializes into a search for a tint or shade
//!     that exceeds a target WCAG contrast ratio.
//!   * [`Interpolator`] and [`gradient`] produce linear RGB blends, and
//!     hue [`Color::rotation`]s produce evenly spaced color wheels.
//!
//!
//! ## 2. One-Two-Three: Colors!
//!
//! Parse a color, transform it in a perceptual space, and measure it:
//!
//! ```
//! # use tinct::{Color, ColorSpace};
//! # use tinct::error::ColorFormatError;
//! let coral: Color = "#ff7f50".parse()?;
//!
//! // Halve the chroma in LCH, leaving lightness and hue alone.
//! let muted = coral.map(ColorSpace::Lch, |[l, c, h]| [l, c / 2.0, h]);
//! assert!(muted.distance(&coral) > 1.0);
//!
//! // Find a shade of coral that clears WCAG AA against white.
//! let white = Color::from_24bit(0xff, 0xff, 0xff);
//! let accessible = coral.tint_ratio(&white, 4.5);
//! assert!(accessible.contrast_ratio(&white) > 4.5);
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Tinct supports one feature flag:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
pub mod iterate;
mod object;

#[doc(hidden)]
pub use crate::core::to_eq_bits;

pub use crate::core::{ChannelValue, ColorSpace, HexFormat, WhitePoint};
pub use object::{gradient, Color, Interpolator};
