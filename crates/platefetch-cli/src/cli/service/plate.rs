use crate::cli::error::Result;
use platefetch::{MAX_INDEX, Plate, PlateIndex, Plates};

/// Encodes a textual index.
///
/// # Errors
///
/// Fails if `raw` is not a plain decimal number, is absurdly long, or is past
/// the last plate.
pub fn encode(raw: &str) -> Result<Plate> {
    let index: PlateIndex = raw.parse()?;
    Ok(index.plate())
}

/// Decodes a plate code, ignoring surrounding whitespace.
///
/// # Errors
///
/// Fails if `code` is not a well-formed plate code.
pub fn decode(code: &str) -> Result<u64> {
    Ok(platefetch::decode(code.trim())?)
}

/// The last plate and its index.
pub const fn max() -> (u64, Plate) {
    (MAX_INDEX, Plate::LAST)
}

/// Consecutive plates from a textual start index.
///
/// # Errors
///
/// Fails if `start` is not a valid index.
pub fn range(start: &str, count: u64) -> Result<Plates> {
    let start: PlateIndex = start.parse()?;
    Ok(Plates::range(start.get(), count)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::error::ServiceError;
    use platefetch::PlateError;

    #[test]
    fn encodes_text() {
        assert_eq!(encode("123").unwrap().as_str(), "000123");
        assert_eq!(encode("1100000").unwrap().as_str(), "00000B");
    }

    #[test]
    fn reports_specific_failures() {
        assert!(matches!(
            encode("-1"),
            Err(ServiceError::Plate(PlateError::Malformed { .. }))
        ));
        assert_eq!(
            encode("501363136").unwrap_err().to_string(),
            "Index out of supported range. Max allowed: 501363135."
        );
        assert!(matches!(
            encode(&"1".repeat(40)),
            Err(ServiceError::Plate(PlateError::TooLong { .. }))
        ));
    }

    #[test]
    fn decodes_trimmed_codes() {
        assert_eq!(decode(" 99999Z\n").unwrap(), 3_599_999);
        assert!(decode("99999z").is_err());
    }

    #[test]
    fn max_is_last_plate() {
        let (index, plate) = max();
        assert_eq!(index, 501_363_135);
        assert_eq!(plate.as_str(), "ZZZZZZ");
    }

    #[test]
    fn range_is_clipped() {
        let codes: Vec<String> = range("501363134", 10)
            .unwrap()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(codes, ["ZZZZZY", "ZZZZZZ"]);
    }
}
