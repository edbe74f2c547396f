use crate::error::ColorFormatError;

/// The preferred width for formatting colors as hashed hexadecimal strings.
///
/// A color is stored with 16 bits per channel, so the lossless textual form
/// uses four hexadecimal digits per channel, e.g., `#ffff7f7f5050`. Most
/// colors in the wild, however, originate from two-digit notation and survive
/// a round trip through the shorter form unscathed. This enumeration picks
/// between the two widths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HexFormat {
    /// Use two digits per channel where that loses no information, four
    /// otherwise.
    #[default]
    Shortened,
    /// Always use four digits per channel.
    Long,
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a hexadecimal digit into its numeric value.
fn parse_digit(s: &str, index: usize) -> Result<u16, ColorFormatError> {
    let c = char_at(s, index);
    c.to_digit(16)
        .map(|d| d as u16)
        .ok_or(ColorFormatError::MalformedHex(c, index))
}

/// Access the character at the given byte index. Only called with indices
/// known to be in range of an ASCII-only string.
fn char_at(s: &str, index: usize) -> char {
    s[index..].chars().next().unwrap_or('\u{fffd}')
}

/// Parse a channel of `width` hexadecimal digits starting at `start` and scale
/// it to 16 bits by digit replication.
fn parse_channel(s: &str, start: usize, width: usize) -> Result<u16, ColorFormatError> {
    let mut value = 0;
    for offset in 0..width {
        value = (value << 4) + parse_digit(s, start + offset)?;
    }

    // Replicating the digits is exact: f scales to ffff, a7 to a7a7.
    Ok(match width {
        1 => value * 0x1111,
        2 => value * 0x0101,
        _ => value,
    })
}

/// Parse a color in hashed hexadecimal notation.
///
/// The accepted forms are `#RGB`, `#RRGGBB`, and `#RRRRGGGGBBBB`, with 1, 2,
/// or 4 digits per channel. Shorter channels scale to 16 bits by digit
/// replication, so `#fff` and `#ffffffffffff` denote the same white.
pub(crate) fn parse(s: &str) -> Result<[u16; 3], ColorFormatError> {
    let s = s.trim();
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if !s.is_ascii() {
        // All valid digits are ASCII, so pin the error on the first offender.
        let (index, c) = s
            .char_indices()
            .find(|(_, c)| !c.is_ascii())
            .unwrap_or((0, '#'));
        return Err(ColorFormatError::MalformedHex(c, index));
    }

    let width = match s.len() - 1 {
        3 => 1,
        6 => 2,
        12 => 4,
        n => return Err(ColorFormatError::UnexpectedCharacters(n)),
    };

    Ok([
        parse_channel(s, 1, width)?,
        parse_channel(s, 1 + width, width)?,
        parse_channel(s, 1 + 2 * width, width)?,
    ])
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether a 16-bit channel is a byte replicated twice.
fn is_byte_replicated(channel: u16) -> bool {
    channel >> 8 == channel & 0xff
}

/// Format a color in hashed hexadecimal notation.
///
/// With [`HexFormat::Shortened`], this function emits two digits per channel
/// when no channel loses information that way and silently falls back to
/// four digits otherwise. With [`HexFormat::Long`], it always emits four.
pub(crate) fn format(
    channels: &[u16; 3],
    hex: HexFormat,
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    let [r, g, b] = *channels;

    if matches!(hex, HexFormat::Shortened) && channels.iter().all(|&c| is_byte_replicated(c)) {
        write!(f, "#{:02x}{:02x}{:02x}", r >> 8, g >> 8, b >> 8)
    } else {
        write!(f, "#{:04x}{:04x}{:04x}", r, g, b)
    }
}
