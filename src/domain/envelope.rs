//! The `{ "success": true, "data": ... }` response envelope.
//!
//! An [`Envelope`] is built fresh for every response and never retained.
//! It owns (or borrows) the payload only long enough to be serialized.

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Status code used when a caller does not supply one (HTTP 200 OK).
pub const DEFAULT_SUCCESS_CODE: u16 = 200;

/// Standard JSON wrapper for successful responses.
///
/// Serializes as `{"success": true, "data": <payload>}` with `success`
/// first. `data` is always emitted, including when the payload is null.
/// `success` is not stored: every envelope is a success envelope, and
/// decoding one with `"success": false` fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    // ---
    data: T,
}

impl<T> Envelope<T> {
    // ---
    /// Wraps `data` in a success envelope.
    pub fn success(data: T) -> Self {
        // ---
        Self { data }
    }

    /// The wrapped payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Unwraps the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // ---
        let mut state = serializer.serialize_struct("Envelope", 2)?;
        state.serialize_field("success", &true)?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // ---
        #[derive(Deserialize)]
        struct Wire<T> {
            success: bool,
            data: T,
        }

        let wire = Wire::<T>::deserialize(deserializer)?;
        if !wire.success {
            return Err(D::Error::custom("envelope `success` must be true"));
        }
        Ok(Envelope::success(wire.data))
    }
}

/// Wraps `data` in a success envelope.
///
/// Shorthand for [`Envelope::success`].
pub fn envelope<T>(data: T) -> Envelope<T> {
    Envelope::success(data)
}
