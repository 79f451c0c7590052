use crate::Format;
use crate::consts::OLD_CENTURY_PREFIX;
use serde::Serialize;

/// The structural fields of a NIC, extracted verbatim as strings.
///
/// Field widths are fixed per format and the extraction is purely
/// positional; no validation happens here. The 2-digit year of an
/// old-format NIC is expanded to 4 digits with the "19" prefix so `year`
/// always holds a full birth year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NicParts {
    /// Full 4-digit birth year.
    pub year: String,
    /// 3-digit day-of-year, offset by 500 for female holders.
    pub days: String,
    /// Serial number: 3 digits in the old format, 4 in the new.
    pub serial: String,
    /// Trailing verification digit. Stored, never re-verified.
    pub checkdigit: char,
    /// Voter letter (`V`/`X`) of the old format; `None` for the new format.
    pub letter: Option<char>,
}

impl NicParts {
    /// Decomposes a sanitized NIC string of the given format.
    ///
    /// The caller must have confirmed the string matches the fixed-width
    /// shape of `format` (ASCII, correct length).
    pub(crate) fn decompose(nic: &str, format: Format) -> Self {
        match format {
            Format::Old => Self::from_old(nic),
            Format::New => Self::from_new(nic),
        }
    }

    fn from_old(nic: &str) -> Self {
        Self {
            year: format!("{OLD_CENTURY_PREFIX}{}", &nic[0..2]),
            days: nic[2..5].to_owned(),
            serial: nic[5..8].to_owned(),
            checkdigit: char::from(nic.as_bytes()[8]),
            letter: Some(char::from(nic.as_bytes()[9])),
        }
    }

    fn from_new(nic: &str) -> Self {
        Self {
            year: nic[0..4].to_owned(),
            days: nic[4..7].to_owned(),
            serial: nic[7..11].to_owned(),
            checkdigit: char::from(nic.as_bytes()[11]),
            letter: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_old() {
        let parts = NicParts::decompose("911042754V", Format::Old);
        assert_eq!(parts.year, "1991");
        assert_eq!(parts.days, "104");
        assert_eq!(parts.serial, "275");
        assert_eq!(parts.checkdigit, '4');
        assert_eq!(parts.letter, Some('V'));
    }

    #[test]
    fn test_decompose_new() {
        let parts = NicParts::decompose("197419202757", Format::New);
        assert_eq!(parts.year, "1974");
        assert_eq!(parts.days, "192");
        assert_eq!(parts.serial, "0275");
        assert_eq!(parts.checkdigit, '7');
        assert_eq!(parts.letter, None);
    }

    #[test]
    fn test_serde_shape() {
        let parts = NicParts::decompose("911042754V", Format::Old);
        let json = serde_json::to_value(&parts).expect("failed to serialize parts");
        assert_eq!(
            json,
            serde_json::json!({
                "year": "1991",
                "days": "104",
                "serial": "275",
                "checkdigit": "4",
                "letter": "V",
            })
        );

        let parts = NicParts::decompose("197419202757", Format::New);
        let json = serde_json::to_value(&parts).expect("failed to serialize parts");
        assert_eq!(json["letter"], serde_json::Value::Null);
    }
}
