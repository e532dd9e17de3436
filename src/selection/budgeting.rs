use std::collections::BTreeSet;

use crate::catalog::CostedItem;

/// A negative or NaN remaining budget admits nothing.
pub fn budget_admits_anything(budget: f64) -> bool {
    budget >= 0.0
}

/// An item fits when it costs no more than `budget` (equality accepted) and
/// its name has not been chosen yet.
pub fn fits<T>(item: &T, chosen: &BTreeSet<&str>, budget: f64) -> bool
where
    T: CostedItem + ?Sized,
{
    budget_admits_anything(budget) && item.cost() <= budget && !chosen.contains(item.name())
}

/// Running account of a selection run.
///
/// Spending only grows through [`try_charge`](Self::try_charge), which checks
/// `spent + cost <= budget` on the sum it is about to store, so `spent` never
/// exceeds `budget` by rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetLedger {
    budget: f64,
    spent: f64,
}

impl BudgetLedger {
    pub fn new(budget: f64) -> Self {
        Self { budget, spent: 0.0 }
    }

    /// A ledger with `reserved` already spent, e.g. a return journey paid
    /// for up front. When `reserved` exceeds `budget` nothing is admitted.
    pub fn with_reserved(budget: f64, reserved: f64) -> Self {
        Self {
            budget,
            spent: reserved.max(0.0),
        }
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn spent(&self) -> f64 {
        self.spent
    }

    pub fn remaining(&self) -> f64 {
        self.budget - self.spent
    }

    pub fn admits(&self, cost: f64) -> bool {
        budget_admits_anything(self.remaining()) && cost >= 0.0 && self.spent + cost <= self.budget
    }

    pub fn admits_item<T>(&self, item: &T, chosen: &BTreeSet<&str>) -> bool
    where
        T: CostedItem + ?Sized,
    {
        self.admits(item.cost()) && !chosen.contains(item.name())
    }

    /// Charge `cost` if it fits. Returns whether it was charged.
    pub fn try_charge(&mut self, cost: f64) -> bool {
        if self.admits(cost) {
            self.spent += cost;
            true
        } else {
            false
        }
    }

    /// Take over `other` when it continues this ledger: same budget, no less
    /// spent. Anything else is ignored so a run can never be refunded.
    pub(crate) fn advance_to(&mut self, other: BudgetLedger) {
        if other.budget.to_bits() == self.budget.to_bits() && other.spent >= self.spent {
            *self = other;
        }
    }
}
