use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

use avl_set::{AvlSet, AvlSetError, ReverseOrder};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Routes the engine's rotation traces to the test output when `RUST_LOG` asks for them.
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generates values in a range that ensures collisions.
fn value_strategy() -> impl Strategy<Value = i32> {
    -500i32..500i32
}

fn batch_strategy() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(value_strategy(), 0..20)
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i32),
    Remove(i32),
    Take(i32),
    Contains(i32),
    Get(i32),
    Lower(i32),
    Floor(i32),
    Ceiling(i32),
    Higher(i32),
    First,
    Last,
    PopFirst,
    PopLast,
    AddAll(Vec<i32>),
    RemoveAll(Vec<i32>),
    RetainAll(Vec<i32>),
    ContainsAll(Vec<i32>),
    Clear,
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        8 => value_strategy().prop_map(SetOp::Insert),
        4 => value_strategy().prop_map(SetOp::Remove),
        1 => value_strategy().prop_map(SetOp::Take),
        2 => value_strategy().prop_map(SetOp::Contains),
        1 => value_strategy().prop_map(SetOp::Get),
        1 => value_strategy().prop_map(SetOp::Lower),
        1 => value_strategy().prop_map(SetOp::Floor),
        1 => value_strategy().prop_map(SetOp::Ceiling),
        1 => value_strategy().prop_map(SetOp::Higher),
        1 => Just(SetOp::First),
        1 => Just(SetOp::Last),
        1 => Just(SetOp::PopFirst),
        1 => Just(SetOp::PopLast),
        1 => batch_strategy().prop_map(SetOp::AddAll),
        1 => batch_strategy().prop_map(SetOp::RemoveAll),
        1 => proptest::collection::vec(value_strategy(), 0..400).prop_map(SetOp::RetainAll),
        1 => batch_strategy().prop_map(SetOp::ContainsAll),
        1 => Just(SetOp::Clear),
    ]
}

/// Applies `op` to both sets and checks that they answer alike.
fn check_op(avl: &mut AvlSet<i32>, bt: &mut BTreeSet<i32>, op: &SetOp) -> Result<(), TestCaseError> {
    match op {
        SetOp::Insert(v) => prop_assert_eq!(avl.insert(*v), bt.insert(*v), "insert({})", v),
        SetOp::Remove(v) => prop_assert_eq!(avl.remove(v), bt.remove(v), "remove({})", v),
        SetOp::Take(v) => prop_assert_eq!(avl.take(v), bt.take(v), "take({})", v),
        SetOp::Contains(v) => prop_assert_eq!(avl.contains(v), bt.contains(v), "contains({})", v),
        SetOp::Get(v) => prop_assert_eq!(avl.get(v), bt.get(v), "get({})", v),
        SetOp::Lower(v) => prop_assert_eq!(avl.lower(v), bt.range(..*v).next_back(), "lower({})", v),
        SetOp::Floor(v) => prop_assert_eq!(avl.floor(v), bt.range(..=*v).next_back(), "floor({})", v),
        SetOp::Ceiling(v) => prop_assert_eq!(avl.ceiling(v), bt.range(*v..).next(), "ceiling({})", v),
        SetOp::Higher(v) => {
            prop_assert_eq!(avl.higher(v), bt.range((Excluded(*v), Unbounded)).next(), "higher({})", v);
        }
        SetOp::First => prop_assert_eq!(avl.first().ok(), bt.first(), "first()"),
        SetOp::Last => prop_assert_eq!(avl.last().ok(), bt.last(), "last()"),
        SetOp::PopFirst => prop_assert_eq!(avl.pop_first(), bt.pop_first(), "pop_first()"),
        SetOp::PopLast => prop_assert_eq!(avl.pop_last(), bt.pop_last(), "pop_last()"),
        SetOp::AddAll(values) => {
            let bt_changed = values.iter().fold(false, |changed, v| bt.insert(*v) | changed);
            prop_assert_eq!(avl.add_all(values.iter().copied()), bt_changed, "add_all({:?})", values);
        }
        SetOp::RemoveAll(values) => {
            let bt_changed = values.iter().fold(false, |changed, v| bt.remove(v) | changed);
            prop_assert_eq!(avl.remove_all(values), bt_changed, "remove_all({:?})", values);
        }
        SetOp::RetainAll(values) => {
            let keep: AvlSet<i32> = values.iter().copied().collect();
            let before = bt.len();
            bt.retain(|v| keep.contains(v));
            prop_assert_eq!(avl.retain_all(&keep), bt.len() != before, "retain_all({:?})", values);
        }
        SetOp::ContainsAll(values) => {
            let bt_result = values.iter().all(|v| bt.contains(v));
            prop_assert_eq!(avl.contains_all(values), bt_result, "contains_all({:?})", values);
        }
        SetOp::Clear => {
            avl.clear();
            bt.clear();
        }
    }
    prop_assert_eq!(avl.len(), bt.len());
    Ok(())
}

// ─── Core operations ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random operation sequence on both AvlSet and BTreeSet and asserts identical
    /// results at every step.
    #[test]
    fn set_ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        init_logger();
        let mut avl: AvlSet<i32> = AvlSet::new();
        let mut bt: BTreeSet<i32> = BTreeSet::new();

        for op in &ops {
            check_op(&mut avl, &mut bt, op)?;
        }
        check_op(&mut avl, &mut bt, &SetOp::Clear)?;
        prop_assert!(avl.is_empty());
    }

    /// Ascending and descending walks, borrowing and removable, agree with BTreeSet.
    #[test]
    fn iteration_matches_btreeset(values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE)) {
        let mut avl: AvlSet<i32> = values.iter().copied().collect();
        let bt: BTreeSet<i32> = values.iter().copied().collect();

        prop_assert_eq!(avl.iter().len(), bt.len());
        prop_assert!(avl.iter().eq(bt.iter()));
        prop_assert!(avl.iter().rev().eq(bt.iter().rev()));
        prop_assert!(avl.ascending().eq(bt.iter().copied()));
        prop_assert!(avl.descending().eq(bt.iter().rev().copied()));
        prop_assert_eq!(avl.to_vec(), bt.iter().copied().collect::<Vec<_>>());
        prop_assert!(avl.clone().into_iter().eq(bt.into_iter()));
    }

    /// Removing through the removable iterator never skips or repeats an element and leaves
    /// exactly the survivors.
    #[test]
    fn iterator_removal_matches_btreeset(
        values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE),
        modulus in 1i32..6,
        descending in any::<bool>(),
    ) {
        init_logger();
        let mut avl: AvlSet<i32> = values.iter().copied().collect();
        let mut bt: BTreeSet<i32> = values.iter().copied().collect();
        let doomed = |v: i32| v.rem_euclid(modulus) == 0;

        let mut yielded = Vec::new();
        if descending {
            let mut iter = avl.descending();
            while let Some(v) = iter.next() {
                yielded.push(v);
                if doomed(v) {
                    prop_assert_eq!(iter.remove(), Ok(v));
                }
            }
        } else {
            let mut iter = avl.ascending();
            while let Some(v) = iter.next() {
                yielded.push(v);
                if doomed(v) {
                    prop_assert_eq!(iter.remove(), Ok(v));
                }
            }
        }

        let mut expected: Vec<i32> = bt.iter().copied().collect();
        if descending {
            expected.reverse();
        }
        prop_assert_eq!(yielded, expected);

        bt.retain(|&v| !doomed(v));
        prop_assert!(avl.iter().eq(bt.iter()));
        prop_assert_eq!(avl.len(), bt.len());
    }

    #[test]
    fn retain_matches_btreeset(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let mut avl: AvlSet<i32> = values.iter().copied().collect();
        let mut bt: BTreeSet<i32> = values.iter().copied().collect();

        avl.retain(|&v| v % 3 != 0);
        bt.retain(|&v| v % 3 != 0);
        prop_assert!(avl.iter().eq(bt.iter()));

        // The set stays fully usable afterwards.
        for v in &values {
            prop_assert_eq!(avl.insert(*v), bt.insert(*v));
        }
        prop_assert!(avl.iter().eq(bt.iter()));
    }

    /// A reversed comparator behaves like a BTreeSet of `Reverse` values.
    #[test]
    fn reverse_order_matches_reversed_btreeset(
        values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE),
        probes in proptest::collection::vec(value_strategy(), 50),
    ) {
        let mut avl = AvlSet::from_iter_with_comparator(ReverseOrder, values.iter().copied());
        let mut bt: BTreeSet<Reverse<i32>> = values.iter().copied().map(Reverse).collect();

        prop_assert!(avl.iter().copied().eq(bt.iter().map(|r| r.0)));
        prop_assert_eq!(avl.first().ok().copied(), bt.first().map(|r| r.0));

        for v in &probes {
            let r = Reverse(*v);
            prop_assert_eq!(avl.floor(v).copied(), bt.range(..=r).next_back().map(|r| r.0));
            prop_assert_eq!(avl.ceiling(v).copied(), bt.range(r..).next().map(|r| r.0));
            prop_assert_eq!(avl.lower(v).copied(), bt.range(..r).next_back().map(|r| r.0));
            prop_assert_eq!(avl.higher(v).copied(), bt.range((Excluded(r), Unbounded)).next().map(|r| r.0));
            prop_assert_eq!(avl.remove(v), bt.remove(&r));
        }

        prop_assert_eq!(avl.pop_first(), bt.pop_first().map(|r| r.0));
        prop_assert_eq!(avl.pop_last(), bt.pop_last().map(|r| r.0));
        prop_assert!(avl.iter().copied().eq(bt.iter().map(|r| r.0)));
    }
}

// ─── Concrete scenarios ──────────────────────────────────────────────────────

#[test]
fn navigation_over_a_small_set() {
    let set = AvlSet::from([5, 3, 8, 1, 4, 7, 9]);

    assert_eq!(set.first(), Ok(&1));
    assert_eq!(set.last(), Ok(&9));
    assert_eq!(set.to_vec(), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(set.floor(&6), Some(&5));
    assert_eq!(set.ceiling(&6), Some(&7));
    assert_eq!(set.lower(&5), Some(&4));
    assert_eq!(set.higher(&5), Some(&7));
}

#[test]
fn emptying_a_balanced_set_one_median_at_a_time() {
    let mut set = AvlSet::from([4, 2, 6, 1, 3, 5, 7]);
    let mut expected: BTreeSet<i32> = (1..=7).collect();

    while !expected.is_empty() {
        let median = *expected.iter().nth(expected.len() / 2).unwrap();
        assert!(set.remove(&median));
        expected.remove(&median);
        assert_eq!(set.len(), expected.len());
        assert_eq!(set.to_vec(), expected.iter().copied().collect::<Vec<_>>());
    }
    assert!(set.is_empty());
}

#[test]
fn removing_everything_while_walking() {
    init_logger();
    for descending in [false, true] {
        let mut set: AvlSet<i32> = (0..100).collect();
        let mut count = 0;
        if descending {
            let mut iter = set.descending();
            while iter.next().is_some() {
                iter.remove().unwrap();
                count += 1;
            }
        } else {
            let mut iter = set.ascending();
            while iter.next().is_some() {
                iter.remove().unwrap();
                count += 1;
            }
        }
        assert_eq!(count, 100);
        assert!(set.is_empty());
        assert_eq!(set.first(), Err(AvlSetError::Empty));
    }
}

#[test]
fn iterator_misuse_is_reported() {
    let mut set = AvlSet::from([1, 2]);
    let mut iter = set.ascending();
    assert_eq!(iter.remove(), Err(AvlSetError::NothingToRemove));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.remove(), Ok(1));
    assert_eq!(iter.remove(), Err(AvlSetError::NothingToRemove));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert!(!iter.has_next());
}

#[test]
fn empty_set_errors() {
    let set: AvlSet<String> = AvlSet::new();
    assert_eq!(set.first(), Err(AvlSetError::Empty));
    assert_eq!(set.last(), Err(AvlSetError::Empty));
    assert_eq!(set.first().unwrap_err().to_string(), "the set is empty");
}

#[test]
fn closure_comparator_orders_owned_strings() {
    let mut set = AvlSet::from_fn(|a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()));
    assert!(set.insert("Banana".to_string()));
    assert!(set.insert("apple".to_string()));
    assert!(!set.insert("APPLE".to_string()));
    assert_eq!(set.to_vec(), vec!["apple".to_string(), "Banana".to_string()]);
    assert_eq!(set.ceiling(&"b".to_string()), Some(&"Banana".to_string()));
}

#[test]
fn large_sequential_set_stays_searchable() {
    let mut set = AvlSet::with_capacity(10_000);
    for v in 0..10_000 {
        assert!(set.insert(v));
    }
    assert!((0..10_000).all(|v| set.contains(&v)));
    for v in (0..10_000).step_by(2) {
        assert!(set.remove(&v));
    }
    assert_eq!(set.len(), 5_000);
    assert!(set.iter().copied().eq((1..10_000).step_by(2)));
}
