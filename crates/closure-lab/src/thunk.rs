//! Deferred evaluation: zero-argument providers whose side effect runs only
//! when the callee invokes them.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::{LabError, Result};

/// A deferred computation producing a customer name.
pub type Provider = Box<dyn FnOnce() -> Result<String>>;

/// Ordered line of customers shared between its owner and any providers.
#[derive(Debug, Clone, Default)]
pub struct CustomerLine {
    customers: Rc<RefCell<VecDeque<String>>>,
}

impl CustomerLine {
    pub fn new<I, S>(customers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            customers: Rc::new(RefCell::new(customers.into_iter().map(Into::into).collect())),
        }
    }

    /// Removes and returns the head of the line.
    pub fn remove_first(&self) -> Result<String> {
        self.customers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| LabError::precondition("remove_first", "the customer line is empty"))
    }

    /// A provider that removes the head of the line when, and only when, it is invoked.
    pub fn provider(&self) -> Provider {
        let line = self.clone();
        Box::new(move || line.remove_first())
    }

    pub fn len(&self) -> usize {
        self.customers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.borrow().is_empty()
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.customers.borrow().iter().cloned().collect()
    }
}

fn serving(name: &str) -> String {
    format!("Now serving {name}!")
}

/// Invokes `provider` immediately.
pub fn serve_customer(provider: impl FnOnce() -> Result<String>) -> Result<String> {
    Ok(serving(&provider()?))
}

/// Providers collected now and invoked later, in order.
#[derive(Default)]
pub struct ProviderQueue {
    providers: Vec<Provider>,
}

impl ProviderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `provider` without invoking it. Returns how many are queued.
    pub fn collect(&mut self, provider: Provider) -> usize {
        self.providers.push(provider);
        log::debug!("Collected {} closure(s)", self.providers.len());
        self.providers.len()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Invokes every provider in insertion order. Stops at the first failure.
    pub fn drain(self) -> Result<Vec<String>> {
        self.providers
            .into_iter()
            .map(|provider| serve_customer(provider))
            .collect()
    }
}

impl std::fmt::Debug for ProviderQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderQueue")
            .field("pending", &self.providers.len())
            .finish()
    }
}
