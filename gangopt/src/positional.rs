//! Ordered positional slots.

use crate::error::{Error, Result};
use crate::option::{SetResult, Setter};

pub struct Slot<R> {
    name: String,
    list: bool,
    pub(crate) setter: Box<dyn Setter<R>>,
}

impl<R> Slot<R> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A list slot absorbs every remaining token.
    pub fn is_list(&self) -> bool {
        self.list
    }
}

/// Positional schema. Every slot is required; only the last may be a list.
///
/// Slots are declared in order with [`arg`](Positional::arg) and
/// [`list`](Positional::list); misplacing a list is reported by
/// [`ParserBuilder::build`](crate::ParserBuilder::build).
pub struct Positional<R> {
    slots: Vec<Slot<R>>,
}

impl<R> Positional<R> {
    pub fn new() -> Self {
        Positional { slots: Vec::new() }
    }

    pub fn slots(&self) -> &[Slot<R>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn ends_in_list(&self) -> bool {
        self.slots.last().is_some_and(|s| s.list)
    }

    /// Slot receiving the `n`th positional token, if any.
    pub(crate) fn slot_for(&self, n: usize) -> Option<&Slot<R>> {
        match self.slots.get(n) {
            Some(slot) => Some(slot),
            None => self.slots.last().filter(|s| s.list),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let Some((_, init)) = self.slots.split_last() else {
            return Ok(());
        };
        match init.iter().find(|s| s.list) {
            Some(slot) => Err(Error::MisplacedList(slot.name.clone())),
            None => Ok(()),
        }
    }
}

impl<R: 'static> Positional<R> {
    fn push<S>(mut self, name: &str, list: bool, setter: S) -> Self
    where
        S: Setter<R> + 'static,
    {
        self.slots.push(Slot {
            name: name.to_string(),
            list,
            setter: Box::new(setter),
        });
        self
    }

    /// A single required token.
    pub fn arg<F>(self, name: &str, set: F) -> Self
    where
        F: Fn(&mut R, &str) -> SetResult + Send + Sync + 'static,
    {
        self.push(name, false, set)
    }

    /// One or more tokens; the setter runs once per token.
    pub fn list<F>(self, name: &str, set: F) -> Self
    where
        F: Fn(&mut R, &str) -> SetResult + Send + Sync + 'static,
    {
        self.push(name, true, set)
    }

    pub fn arg_with_setter<S>(self, name: &str, setter: S) -> Self
    where
        S: Setter<R> + 'static,
    {
        self.push(name, false, setter)
    }
}

impl<R> Default for Positional<R> {
    fn default() -> Self {
        Self::new()
    }
}
