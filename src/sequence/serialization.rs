//! Serde support for the owning list types.
//!
//! Every list serializes as a plain sequence, so a list written by one
//! backing can be read back by any other.
//!
//! # Examples
//!
//! ```rust
//! use seqlist::prelude::*;
//!
//! let array: ArrayList<i32> = (1..=3).collect();
//! let json = serde_json::to_string(&array).unwrap();
//! assert_eq!(json, "[1,2,3]");
//!
//! let linked: LinkedList<i32> = serde_json::from_str(&json).unwrap();
//! assert_eq!(linked, array);
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ArrayList, ImmutableList, LinkedList};

/// Upper bound on the capacity reserved from an untrusted size hint.
const MAX_PREALLOCATE: usize = 4096;

fn serialize_sequence<'a, T, I, S>(
    length: usize,
    elements: I,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(length))?;
    for element in elements {
        seq.serialize_element(element)?;
    }
    seq.end()
}

/// Collects any serialized sequence into a `C`.
struct SequenceVisitor<C, T> {
    marker: PhantomData<fn() -> (C, T)>,
}

impl<C, T> SequenceVisitor<C, T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, C, T> Visitor<'de> for SequenceVisitor<C, T>
where
    C: From<Vec<T>>,
    T: Deserialize<'de>,
{
    type Value = C;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(C::from(elements))
    }
}

// =============================================================================
// ArrayList
// =============================================================================

impl<T: Serialize> Serialize for ArrayList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_sequence(self.as_slice().len(), self.as_slice(), serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ArrayList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor::new())
    }
}

// =============================================================================
// LinkedList
// =============================================================================

impl<T: Serialize> Serialize for LinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_sequence(self.iter().len(), self.iter(), serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor::new())
    }
}

// =============================================================================
// ImmutableList
// =============================================================================

impl<T: Serialize> Serialize for ImmutableList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_sequence(self.as_slice().len(), self.as_slice(), serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ImmutableList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor::new())
    }
}
