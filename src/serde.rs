use core::marker::PhantomData;

use serde::{
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::InlineVec;

impl<T: Serialize, const N: usize> Serialize for InlineVec<T, N> {
    /// Serializes the vector as a sequence.
    ///
    /// The format is identical whether the elements are stored inline or on
    /// the heap.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for InlineVec<T, N> {
    /// Deserializes the vector from a sequence.
    ///
    /// If the sequence is longer than the inline capacity `N`, the result is
    /// stored on the heap.
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct InlineVecVisitor<T, const N: usize> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for InlineVecVisitor<T, N> {
            type Value = InlineVec<T, N>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut vec = match seq.size_hint() {
                    Some(hint) => InlineVec::with_capacity(hint),
                    None => InlineVec::new(),
                };

                while let Some(element) = seq.next_element()? {
                    vec.push(element);
                }

                Ok(vec)
            }
        }

        deserializer.deserialize_seq(InlineVecVisitor {
            _marker: PhantomData,
        })
    }
}
