/// A result type defaulting to the crate-level [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors `platefetch` can surface to a caller.
///
/// Each component also exposes its own narrower error type
/// ([`PlateError`](crate::PlateError), [`DispatchError`](crate::DispatchError));
/// this enum exists for callers that drive both and want a single `?` target.
///
/// Per-target request failures are *not* represented here. They are captured
/// inside [`Outcome::Rejected`](crate::Outcome::Rejected) so one failing
/// target never fails the whole batch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A plate index or code was rejected by the codec.
    #[cfg(feature = "plate")]
    #[error(transparent)]
    Plate(#[from] crate::PlateError),

    /// A dispatch session failed as a whole.
    #[cfg(feature = "dispatch")]
    #[error(transparent)]
    Dispatch(#[from] crate::DispatchError),
}

#[cfg(all(test, feature = "plate", feature = "dispatch"))]
mod tests {
    use super::*;
    use crate::{DispatchError, PlateError, decode, encode};

    fn roundtrip(code: &str) -> Result<String> {
        let index = decode(code)?;
        Ok(encode(index + 1)?.to_string())
    }

    fn settle(index: usize) -> Result<()> {
        let unsettled: core::result::Result<(), DispatchError> =
            Err(DispatchError::Unsettled { index });
        unsettled?;
        Ok(())
    }

    #[test]
    fn component_errors_convert_with_question_mark() {
        assert_eq!(roundtrip("00000A").unwrap(), "00001A");
        assert_eq!(
            roundtrip("ZZZZZZ"),
            Err(Error::Plate(PlateError::OutOfRange {
                index: 501_363_136,
                max: 501_363_135,
            }))
        );
        assert_eq!(
            roundtrip("0A0000"),
            Err(Error::Plate(PlateError::DigitAfterLetter { position: 2 }))
        );
        assert_eq!(
            settle(3),
            Err(Error::Dispatch(DispatchError::Unsettled { index: 3 }))
        );
    }

    #[test]
    fn messages_pass_through() {
        let err: Error = PlateError::NotAnInteger.into();
        assert_eq!(err.to_string(), PlateError::NotAnInteger.to_string());
    }
}
