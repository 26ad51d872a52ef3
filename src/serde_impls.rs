//! Serde support, enabled by the `serde` feature.
//!
//! A [`ZString`] serializes as its content bytes (the terminator is a
//! storage detail, not content) and deserializes by fallible copy, so an
//! allocation failure surfaces as a deserializer error instead of a panic.
//! [`ZView`] and [`ZSlice`] serialize the bytes they alias; being borrows,
//! they do not deserialize.

use crate::{ZSlice, ZString, ZView};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for ZString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

impl Serialize for ZView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

impl Serialize for ZSlice<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

struct ZStringVisitor;

impl<'de> Visitor<'de> for ZStringVisitor {
    type Value = ZString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a byte array or string")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<ZString, E> {
        ZString::from_bytes(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ZString, E> {
        ZString::from_bytes(v.as_bytes()).map_err(E::custom)
    }

    // Self-describing formats without a native bytes type (JSON among them)
    // deliver a sequence of integers instead.
    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<ZString, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        ZString::from_bytes(&bytes).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for ZString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(ZStringVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::ZString;

    #[test]
    fn json_round_trip() {
        let s = ZString::from_bytes(b"Hello, World!").unwrap();
        let json = serde_json::to_string(&s).unwrap();

        let back: ZString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
        assert_eq!(back.as_bytes_with_nul().last(), Some(&0));
    }

    #[test]
    fn view_and_slice_serialize_aliased_bytes() {
        let s = ZString::from_bytes(b"Hello, World!").unwrap();

        let view_json = serde_json::to_string(&s.view()).unwrap();
        let slice_json = serde_json::to_string(&s.slice(0, 5).unwrap()).unwrap();

        let whole: ZString = serde_json::from_str(&view_json).unwrap();
        let hello: ZString = serde_json::from_str(&slice_json).unwrap();
        assert_eq!(whole, s);
        assert_eq!(hello, "Hello");
    }

    #[test]
    fn interior_nul_survives_round_trip() {
        let s = ZString::from_bytes(b"a\0b").unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: ZString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
        assert_eq!(back.len(), 3);
    }
}
