//! Serde support for sequences (feature-gated)
//!
//! A `Sequence<E>` serializes exactly like the list it wraps.
//!
//! ```rust,ignore
//! use sifter::Sequence;
//!
//! let seq = Sequence::new([1, 2, 3]);
//! assert_eq!(serde_json::to_string(&seq).unwrap(), "[1,2,3]");
//!
//! let back: Sequence<i32> = serde_json::from_str("[1,2,3]").unwrap();
//! assert_eq!(back, seq);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Sequence;

impl<E> Serialize for Sequence<E>
where
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, E> Deserialize<'de> for Sequence<E>
where
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<E>::deserialize(deserializer).map(Sequence::from)
    }
}
