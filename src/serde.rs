// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`GrowVec`](crate::GrowVec).
//!
//! - **Serialize**: as a sequence of the `len` live elements.
//! - **Deserialize**: from any sequence. Each decoded element is copied in
//!   with [`GrowVec::push_back`](crate::GrowVec::push_back), so the result
//!   has the same capacity as a vector built by pushing, and a failing
//!   element copy becomes a deserialization error.

// Crate imports
use crate::{try_clone::TryClone, vec::GrowVec};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for GrowVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + TryClone,
    T::Error: fmt::Display,
{
    type Value = GrowVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = GrowVec::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push_back(&elem).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for GrowVec<T>
where
    T: Deserialize<'de> + TryClone,
    T::Error: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor(PhantomData))
    }
}
