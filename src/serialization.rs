//! Serde support, using the same externally tagged shape as
//! `std::result::Result`: `{"Ok": ..}` or `{"Err": ..}`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::result::Result;

impl<T: Serialize, E: Serialize> Serialize for Result<T, E> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_ref().into_std().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Result<T, E> {
    /// A deserialized `Err` records no origin.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match std::result::Result::<T, E>::deserialize(deserializer)? {
            Ok(value) => crate::result::ok(value),
            Err(value) => Result::from_err_parts(value, None),
        })
    }
}
