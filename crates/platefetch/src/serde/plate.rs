use crate::{Plate, PlateIndex};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Plates serialize as their six-character code.
impl Serialize for Plate {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Plate {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct PlateVisitor;

        impl serde::de::Visitor<'_> for PlateVisitor {
            type Value = Plate;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a six-character plate code")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(PlateVisitor)
    }
}

impl Serialize for PlateIndex {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(self.get())
    }
}

impl<'de> Deserialize<'de> for PlateIndex {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let n = u64::deserialize(d)?;
        Self::new(n).map_err(serde::de::Error::custom)
    }
}

/// Serializes a [`Plate`] field as its index instead of its code.
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct Row {
///     #[serde(with = "platefetch::as_plate_index")]
///     plate: platefetch::Plate,
/// }
/// # }
/// ```
pub mod as_plate_index {
    use super::*;

    pub fn serialize<S: Serializer>(plate: &Plate, s: S) -> Result<S::Ok, S::Error> {
        plate.index().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Plate, D::Error> {
        let n = u64::deserialize(d)?;
        Plate::from_index(n).map_err(serde::de::Error::custom)
    }
}
