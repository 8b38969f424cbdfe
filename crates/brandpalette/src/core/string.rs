use crate::error::ColorFormatError;

/// Format the 24-bit coordinates in lowercase hashed hexadecimal notation.
pub(crate) fn format_hex(coordinates: &[u8; 3]) -> String {
    let [r, g, b] = *coordinates;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Parse a 24-bit color in hashed hexadecimal format.
///
/// This function trims surrounding white space and accepts upper- as well as
/// lowercase digits. The leading `#` is optional, but there must be exactly six
/// hexadecimal digits.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedLength(digits.len()));
    } else if !digits.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex(index));
        }
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex(index))
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

#[cfg(test)]
mod test {
    use super::{format_hex, parse_hex};
    use crate::error::ColorFormatError;

    #[test]
    fn test_format() {
        assert_eq!(format_hex(&[0, 0, 0]), "#000000");
        assert_eq!(format_hex(&[255, 171, 9]), "#ffab09");
    }

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#ffab09")?, [255, 171, 9]);
        assert_eq!(parse_hex("#FFAB09")?, [255, 171, 9]);
        assert_eq!(parse_hex("  3178ea ")?, [0x31, 0x78, 0xea]);

        assert_eq!(parse_hex("#fff"), Err(ColorFormatError::UnexpectedLength(3)));
        assert_eq!(parse_hex("#ffag09"), Err(ColorFormatError::MalformedHex(1)));
        assert_eq!(
            parse_hex("#ff💩"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        Ok(())
    }
}
