use std::cmp::Ordering;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use treesort::sort;

/// Every in-place comparison sort by name, for properties that hold for all
/// of them alike.
const COMPARISON_SORTS: [(&str, fn(&mut [i64])); 7] = [
    ("bubble", sort::bubble_sort),
    ("selection", sort::selection_sort),
    ("insertion", sort::insertion_sort),
    ("heapsort", sort::heapsort),
    ("quicksort", sort::quicksort),
    ("merge", sort::merge_sort),
    ("tree", sort::tree_sort),
];

/// Sorts a copy of the input with the procedure under test and compares it
/// to the standard library's sort. Agreement pins both requirements at
/// once: the output is non-decreasing and is a permutation of the input.
fn agrees_with_std(mut items: Vec<i64>, sort: impl FnOnce(&mut [i64])) -> bool {
    let mut expected = items.clone();
    expected.sort();
    sort(&mut items);
    items == expected
}

#[quickcheck]
fn bubble_sort_agrees_with_std(xs: Vec<i64>) -> bool {
    agrees_with_std(xs, sort::bubble_sort)
}

#[quickcheck]
fn selection_sort_agrees_with_std(xs: Vec<i64>) -> bool {
    agrees_with_std(xs, sort::selection_sort)
}

#[quickcheck]
fn insertion_sort_agrees_with_std(xs: Vec<i64>) -> bool {
    agrees_with_std(xs, sort::insertion_sort)
}

#[quickcheck]
fn heapsort_agrees_with_std(xs: Vec<i64>) -> bool {
    agrees_with_std(xs, sort::heapsort)
}

#[quickcheck]
fn quicksort_agrees_with_std(xs: Vec<i64>) -> bool {
    agrees_with_std(xs, sort::quicksort)
}

#[quickcheck]
fn merge_sort_agrees_with_std(xs: Vec<i64>) -> bool {
    agrees_with_std(xs, sort::merge_sort)
}

#[quickcheck]
fn tree_sort_agrees_with_std(xs: Vec<i64>) -> bool {
    agrees_with_std(xs, sort::tree_sort)
}

#[quickcheck]
fn counting_sort_agrees_with_std(xs: Vec<i16>) -> bool {
    // `i16` keeps the value range well under the histogram limit while
    // still covering negatives.
    agrees_with_std(xs.into_iter().map(i64::from).collect(), |items| {
        sort::counting_sort(items).expect("i16 range fits the histogram")
    })
}

#[quickcheck]
fn radix_sort_agrees_with_std(xs: Vec<u32>) -> bool {
    agrees_with_std(xs.into_iter().map(i64::from).collect(), |items| {
        sort::radix_sort(items).expect("u32 values are non-negative")
    })
}

#[quickcheck]
fn sorted_input_is_left_unchanged(xs: Vec<i64>) -> bool {
    let mut sorted = xs;
    sorted.sort();

    COMPARISON_SORTS.iter().all(|(_, sort)| {
        let mut again = sorted.clone();
        sort(&mut again);
        again == sorted
    })
}

#[quickcheck]
fn radix_sort_reports_the_first_negative(xs: Vec<i64>) -> TestResult {
    let index = match xs.iter().position(|&value| value < 0) {
        Some(index) => index,
        None => return TestResult::discard(),
    };

    let mut items = xs.clone();
    let err = sort::radix_sort(&mut items).unwrap_err();

    let expected = sort::SortError::NegativeValue {
        index,
        value: xs[index],
    };
    TestResult::from_bool(err == expected && items == xs)
}

/// A value whose ordering only looks at `key`, with the element's original
/// position carried along as an inert payload. Equal-keyed elements stay
/// distinguishable, which is what makes stability observable.
#[derive(Clone, Copy, Debug)]
struct Keyed {
    key: u8,
    index: usize,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Tags each key with its input position, sorts, and checks that equal keys
/// still appear in input order.
fn sorts_stably(keys: Vec<u8>, sort: impl FnOnce(&mut [Keyed])) -> bool {
    let mut items: Vec<Keyed> = keys
        .into_iter()
        .enumerate()
        .map(|(index, key)| Keyed { key, index })
        .collect();
    sort(&mut items);

    items.windows(2).all(|pair| {
        pair[0].key < pair[1].key || (pair[0].key == pair[1].key && pair[0].index < pair[1].index)
    })
}

#[quickcheck]
fn bubble_sort_is_stable(keys: Vec<u8>) -> bool {
    sorts_stably(keys, sort::bubble_sort)
}

#[quickcheck]
fn insertion_sort_is_stable(keys: Vec<u8>) -> bool {
    sorts_stably(keys, sort::insertion_sort)
}

#[quickcheck]
fn merge_sort_is_stable(keys: Vec<u8>) -> bool {
    sorts_stably(keys, sort::merge_sort)
}

#[quickcheck]
fn tree_sort_is_stable(keys: Vec<u8>) -> bool {
    sorts_stably(keys, sort::tree_sort)
}
