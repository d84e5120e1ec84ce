//! Closures that capture a shared mutable counter.
//!
//! A `RunningTotal` is a cell that generated incrementers add to. Every
//! clone is a handle to the same cell, so a write through any handle is
//! seen by the next call of every closure capturing it.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared mutable counter
#[derive(Clone, Default)]
pub struct RunningTotal {
    value: Rc<Cell<i64>>,
}

impl RunningTotal {
    pub fn new(initial: i64) -> Self {
        Self {
            value: Rc::new(Cell::new(initial)),
        }
    }

    pub fn get(&self) -> i64 {
        self.value.get()
    }

    pub fn set(&self, value: i64) {
        self.value.set(value);
    }

    /// Adds `amount` and returns the new total, saturating at the `i64` bounds
    pub fn add(&self, amount: i64) -> i64 {
        let total = self.value.get().saturating_add(amount);
        self.value.set(total);
        total
    }

    /// True when both handles refer to the same cell
    pub fn shares_cell_with(&self, other: &RunningTotal) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for RunningTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RunningTotal").field(&self.get()).finish()
    }
}

/// Incrementer over a total owned by the caller's scope.
pub fn incrementer_over(total: &RunningTotal, amount: i64) -> impl FnMut() -> i64 + use<> {
    let total = total.clone();
    move || total.add(amount)
}

/// A generated incrementer together with the total it captured.
pub struct Incrementer {
    amount: i64,
    total: RunningTotal,
    increment: Box<dyn FnMut() -> i64>,
}

impl Incrementer {
    /// Adds the step to the captured total and returns it.
    pub fn call(&mut self) -> i64 {
        (self.increment)()
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Handle to the captured total. Writes through it show up on the next `call`.
    pub fn running_total(&self) -> &RunningTotal {
        &self.total
    }

    pub fn into_fn(self) -> Box<dyn FnMut() -> i64> {
        self.increment
    }
}

impl fmt::Debug for Incrementer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Incrementer")
            .field("amount", &self.amount)
            .field("total", &self.total)
            .finish()
    }
}

/// Generates an incrementer with its own total, starting at zero.
pub fn make_incrementer(amount: i64) -> Incrementer {
    let total = RunningTotal::default();
    let increment = Box::new(incrementer_over(&total, amount));
    Incrementer {
        amount,
        total,
        increment,
    }
}
