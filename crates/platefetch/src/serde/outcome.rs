use crate::Outcome;
use serde::{Serialize, Serializer, ser::SerializeStruct};

/// Outcomes serialize as `{"status", "url", "value" | "reason"}`, with the
/// rejection reason rendered as its message.
impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut state = s.serialize_struct("Outcome", 3)?;
        match self {
            Self::Fulfilled { target, value } => {
                state.serialize_field("status", "fulfilled")?;
                state.serialize_field("url", target)?;
                state.serialize_field("value", value)?;
            }
            Self::Rejected { target, reason } => {
                state.serialize_field("status", "rejected")?;
                state.serialize_field("url", target)?;
                state.serialize_field("reason", &reason.to_string())?;
            }
        }
        state.end()
    }
}
