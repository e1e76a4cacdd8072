use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::AvlSet;
use crate::comparator::Comparator;

/// Writes the elements as a sequence, in the set's order.
impl<T: Serialize, C> Serialize for AvlSet<T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// Reads any sequence, inserting each element under a default-constructed comparator.
/// Duplicates keep their first occurrence.
impl<'de, T, C> Deserialize<'de> for AvlSet<T, C>
where
    T: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(AvlSetVisitor(PhantomData))
    }
}

struct AvlSetVisitor<T, C>(PhantomData<fn() -> AvlSet<T, C>>);

impl<'de, T, C> Visitor<'de> for AvlSetVisitor<T, C>
where
    T: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    type Value = AvlSet<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        // The hint comes from the input, so the preallocation is capped.
        let capacity = access.size_hint().unwrap_or(0).min(4096);
        let mut set = AvlSet::with_capacity_and_comparator(capacity, C::default());
        while let Some(value) = access.next_element()? {
            set.insert(value);
        }
        Ok(set)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::comparator::ReverseOrder;

    #[test]
    fn serializes_in_set_order() {
        let set = AvlSet::from([3, 1, 2]);
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1,2,3]");

        let reversed = AvlSet::from_iter_with_comparator(ReverseOrder, [3, 1, 2]);
        assert_eq!(serde_json::to_string(&reversed).unwrap(), "[3,2,1]");
    }

    #[test]
    fn deserializes_by_reinserting() {
        let set: AvlSet<i32> = serde_json::from_str("[5, 3, 8, 3, 1]").unwrap();
        set.tree.validate_invariants();
        assert_eq!(set.to_vec(), [1, 3, 5, 8]);

        let reversed: AvlSet<i32, ReverseOrder> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(reversed.to_vec(), [3, 2, 1]);
    }

    #[test]
    fn round_trip_keeps_every_element() {
        let set: AvlSet<i32> = (0..500).map(|v| v * 7 % 501).collect();
        let json = serde_json::to_string(&set).unwrap();
        let back: AvlSet<i32> = serde_json::from_str(&json).unwrap();
        back.tree.validate_invariants();
        assert_eq!(back, set);
    }

    #[test]
    fn rejects_non_sequences_and_bad_elements() {
        assert!(serde_json::from_str::<AvlSet<i32>>("{\"a\": 1}").is_err());
        assert!(serde_json::from_str::<AvlSet<i32>>("[1, \"two\"]").is_err());
    }
}
