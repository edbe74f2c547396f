mod contrast;
mod conversion;
mod difference;
mod equality;
mod gamut;
mod math;
mod space;
mod string;
mod transform;

// contrast
pub(crate) use contrast::{relative_luminance, to_contrast_ratio};

// conversion
pub(crate) use conversion::{from_24bit, to_24bit};

// difference
pub(crate) use difference::delta_e_2000;

// equality
#[cfg(test)]
pub(crate) use equality::assert_within;
pub use equality::to_eq_bits;

// gamut
pub(crate) use gamut::clip;

// math
pub(crate) use math::FloatExt;

// space
pub use space::{ColorSpace, WhitePoint};

// string
pub use string::HexFormat;
pub(crate) use string::{format, parse};

// transform
pub use transform::ChannelValue;
pub(crate) use transform::{from_triple, to_triple};
