//! Event ordering: in-place randomized quicksort keyed on timestamp.
//!
//! Construction only needs the contact log in non-decreasing timestamp order;
//! ties may land in any order because same-timestamp events are commutative
//! for the graph shape. Expected O(n log n) comparisons with a random pivot.

use crate::types::Contact;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sort contacts in place by non-decreasing timestamp.
///
/// A fixed `seed` pins the pivot choices for reproducible runs; `None` draws
/// the RNG from OS entropy.
pub fn quicksort_by_timestamp(contacts: &mut [Contact], seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    if contacts.len() > 1 {
        quicksort_rec(contacts, 0, contacts.len() - 1, &mut rng);
    }
}

fn quicksort_rec(contacts: &mut [Contact], start: usize, end: usize, rng: &mut StdRng) {
    if start >= end {
        return;
    }

    let p = randomized_partition(contacts, start, end, rng);
    if p > start {
        quicksort_rec(contacts, start, p - 1, rng);
    }
    if p < end {
        quicksort_rec(contacts, p + 1, end, rng);
    }
}

fn randomized_partition(
    contacts: &mut [Contact],
    start: usize,
    end: usize,
    rng: &mut StdRng,
) -> usize {
    let r = rng.random_range(start..=end);
    contacts.swap(end, r);
    partition(contacts, start, end)
}

/// Lomuto partition around the timestamp at `end`.
fn partition(contacts: &mut [Contact], start: usize, end: usize) -> usize {
    let pivot = contacts[end].timestamp;
    let mut i = start;

    for j in start..end {
        if contacts[j].timestamp <= pivot {
            contacts.swap(i, j);
            i += 1;
        }
    }
    contacts.swap(i, end);

    i
}
