use std::collections::BTreeSet;

use crate::catalog::CostedItem;
use crate::selection::budgeting::{budget_admits_anything, fits, BudgetLedger};
use crate::selection::random::RandomSource;

/// Pick one item from `pool` that fits `budget` and is not already in
/// `chosen`, in uniformly random order.
///
/// The pool's indices are shuffled once and scanned linearly, so every item
/// is inspected at most once. Neither `pool` nor `chosen` is modified.
pub fn pick_one<'a, T, R>(
    pool: &'a [T],
    chosen: &BTreeSet<&str>,
    budget: f64,
    source: &mut R,
) -> Option<&'a T>
where
    T: CostedItem,
    R: RandomSource + ?Sized,
{
    if !budget_admits_anything(budget) {
        return None;
    }

    scan_shuffled(pool, source, budget, |item| fits(item, chosen, budget))
}

/// Like [`pick_one`], but an item must fit what `ledger` has left, judged on
/// `spent + cost <= budget`.
pub fn pick_within<'a, T, R>(
    pool: &'a [T],
    chosen: &BTreeSet<&str>,
    ledger: &BudgetLedger,
    source: &mut R,
) -> Option<&'a T>
where
    T: CostedItem,
    R: RandomSource + ?Sized,
{
    if !budget_admits_anything(ledger.remaining()) {
        return None;
    }

    scan_shuffled(pool, source, ledger.remaining(), |item| ledger.admits_item(item, chosen))
}

fn scan_shuffled<'a, T, R, F>(pool: &'a [T], source: &mut R, budget: f64, mut accept: F) -> Option<&'a T>
where
    T: CostedItem,
    R: RandomSource + ?Sized,
    F: FnMut(&T) -> bool,
{
    if pool.is_empty() {
        return None;
    }

    let mut order: Vec<usize> = (0..pool.len()).collect();
    source.shuffle_indices(&mut order);

    let mut inspected = 0usize;
    let picked = order
        .into_iter()
        .filter_map(|idx| pool.get(idx))
        .find(|item| {
            inspected += 1;
            accept(*item)
        });

    tracing::trace!(
        pool = pool.len(),
        inspected,
        budget,
        picked = picked.map(|item| item.name()),
        "pick"
    );

    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::random::FixedOrder;

    struct Reversed;

    impl RandomSource for Reversed {
        fn shuffle_indices(&mut self, indices: &mut [usize]) {
            indices.reverse();
        }

        fn index_below(&mut self, _upper: usize) -> usize {
            0
        }
    }

    #[derive(Debug, PartialEq)]
    struct Item(&'static str, f64);

    impl CostedItem for Item {
        fn name(&self) -> &str {
            self.0
        }

        fn cost(&self) -> f64 {
            self.1
        }
    }

    #[test]
    fn scan_follows_the_shuffled_order() {
        let pool = [Item("A", 1.0), Item("B", 1.0), Item("C", 1.0)];
        let none = BTreeSet::new();

        assert_eq!(pick_one(&pool, &none, 5.0, &mut FixedOrder), Some(&pool[0]));
        assert_eq!(pick_one(&pool, &none, 5.0, &mut Reversed), Some(&pool[2]));
    }

    #[test]
    fn ledger_pick_respects_the_stored_sum() {
        let pool = [Item("A", 4.4), Item("B", 0.05)];
        let mut ledger = BudgetLedger::new(5.3);
        assert!(ledger.try_charge(0.2));
        assert!(ledger.try_charge(0.7));

        // 4.4 <= 5.3 - 0.9 holds, but 0.9 + 4.4 rounds above 5.3.
        let picked = pick_within(&pool, &BTreeSet::new(), &ledger, &mut FixedOrder);
        assert_eq!(picked, Some(&pool[1]));
    }

    #[test]
    fn rejected_items_are_skipped_not_retried() {
        let pool = [Item("A", 1.0), Item("B", 99.0), Item("C", 2.0)];
        let chosen = BTreeSet::from(["C"]);

        assert_eq!(pick_one(&pool, &chosen, 5.0, &mut Reversed), Some(&pool[0]));
    }
}
