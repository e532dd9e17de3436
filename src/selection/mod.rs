pub mod budgeting;
pub mod picking;
pub mod random;

use std::collections::BTreeSet;

use crate::catalog::CostedItem;
pub use budgeting::{fits, BudgetLedger};
pub use picking::{pick_one, pick_within};
pub use random::{FixedOrder, RandomSource, RngSource};

/// Outcome of one [`BudgetPicker::run_selection`] loop.
#[derive(Debug, Clone)]
pub struct PickResult<'a, T> {
	/// Accepted items, in acceptance order.
	pub chosen: Vec<&'a T>,
	/// Spent during this run: accepted items plus whatever the accept hook
	/// charged. Exact when the run started from an empty ledger.
	pub amount_spent: f64,
	/// The ledger as the run left it.
	pub ledger: BudgetLedger,
	/// True when the loop ended because `max_picks` was reached.
	pub stopped_by_limit: bool,
}

impl<'a, T: CostedItem> PickResult<'a, T> {
	pub fn names(&self) -> Vec<&'a str> {
		self.chosen.iter().copied().map(|item| item.name()).collect()
	}

	/// Cost of the accepted items alone, without nested spending.
	pub fn items_cost(&self) -> f64 {
		self.chosen.iter().map(|item| item.cost()).sum()
	}
}

/// Budget-constrained random picker.
///
/// Owns the random source so nested selections (entertainment inside a
/// destination) draw from the same stream as the outer one.
pub struct BudgetPicker<R> {
	source: R,
}

impl Default for BudgetPicker<FixedOrder> {
	fn default() -> Self {
		Self { source: FixedOrder }
	}
}

impl<R> BudgetPicker<R>
where
	R: RandomSource,
{
	pub fn new(source: R) -> Self {
		Self { source }
	}

	pub fn pick_one<'a, T: CostedItem>(
		&mut self,
		pool: &'a [T],
		chosen: &BTreeSet<&str>,
		budget: f64,
	) -> Option<&'a T> {
		pick_one(pool, chosen, budget, &mut self.source)
	}

	/// Pick one item that fits what `ledger` has left.
	pub fn pick_within<'a, T: CostedItem>(
		&mut self,
		pool: &'a [T],
		chosen: &BTreeSet<&str>,
		ledger: &BudgetLedger,
	) -> Option<&'a T> {
		pick_within(pool, chosen, ledger, &mut self.source)
	}

	/// Repeatedly pick from `pool` until nothing fits, the pool is exhausted
	/// by name, or `max_picks` items have been accepted.
	pub fn run_selection<'a, T: CostedItem>(
		&mut self,
		pool: &'a [T],
		max_picks: Option<usize>,
		budget: f64,
	) -> PickResult<'a, T> {
		self.run_selection_with(pool, max_picks, budget, |_, _, ledger| ledger)
	}

	/// Run a selection that spends from an existing `ledger`, e.g. a nested
	/// selection inside an accepted item.
	pub fn continue_selection<'a, T: CostedItem>(
		&mut self,
		pool: &'a [T],
		max_picks: Option<usize>,
		ledger: BudgetLedger,
	) -> PickResult<'a, T> {
		self.run_selection_from(pool, max_picks, ledger, |_, _, ledger| ledger)
	}

	/// Like [`run_selection`](Self::run_selection), but after every accepted
	/// item `on_accept` is called with the picker, the item and the ledger
	/// after paying for it. The ledger it hands back is where the next pick
	/// starts, as long as it continues the run (same budget, no refund).
	pub fn run_selection_with<'a, T, F>(
		&mut self,
		pool: &'a [T],
		max_picks: Option<usize>,
		budget: f64,
		on_accept: F,
	) -> PickResult<'a, T>
	where
		T: CostedItem,
		F: FnMut(&mut Self, &'a T, BudgetLedger) -> BudgetLedger,
	{
		self.run_selection_from(pool, max_picks, BudgetLedger::new(budget), on_accept)
	}

	/// Like [`run_selection_with`](Self::run_selection_with), starting from
	/// an existing `ledger` instead of an empty one.
	pub fn run_selection_from<'a, T, F>(
		&mut self,
		pool: &'a [T],
		max_picks: Option<usize>,
		mut ledger: BudgetLedger,
		mut on_accept: F,
	) -> PickResult<'a, T>
	where
		T: CostedItem,
		F: FnMut(&mut Self, &'a T, BudgetLedger) -> BudgetLedger,
	{
		let opening = ledger.spent();
		let mut chosen: Vec<&'a T> = Vec::new();
		let mut chosen_names: BTreeSet<&'a str> = BTreeSet::new();
		let mut stopped_by_limit = false;

		loop {
			if max_picks.is_some_and(|limit| chosen.len() >= limit) {
				stopped_by_limit = true;
				break;
			}

			let Some(item) = self.pick_within(pool, &chosen_names, &ledger) else {
				break;
			};

			if !ledger.try_charge(item.cost()) {
				break;
			}
			chosen.push(item);
			chosen_names.insert(item.name());

			tracing::debug!(
				item = item.name(),
				cost = item.cost(),
				remaining = ledger.remaining(),
				"accepted"
			);

			let next = on_accept(self, item, ledger);
			ledger.advance_to(next);
		}

		debug_assert!(chosen.len() == chosen_names.len());
		debug_assert!(ledger.spent() <= ledger.budget() || ledger.spent() == opening);

		PickResult {
			chosen,
			amount_spent: ledger.spent() - opening,
			ledger,
			stopped_by_limit,
		}
	}
}
