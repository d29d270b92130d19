//! Letter -> option index table for short options.

use crate::error::{Error, Result};

const SLOTS: usize = 52;

fn slot(letter: char) -> Option<usize> {
    match letter {
        'a'..='z' => Some(letter as usize - 'a' as usize),
        'A'..='Z' => Some(letter as usize - 'A' as usize + 26),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ShortTable {
    slots: [Option<usize>; SLOTS],
}

impl ShortTable {
    pub(crate) fn new() -> Self {
        ShortTable {
            slots: [None; SLOTS],
        }
    }

    /// Record `idx` under `letter`. Returns `Ok(false)` if the letter is taken.
    pub(crate) fn set(&mut self, letter: char, idx: usize) -> Result<bool> {
        let i = slot(letter).ok_or_else(|| Error::InvalidOption(letter.to_string()))?;
        if self.slots[i].is_some() {
            return Ok(false);
        }
        self.slots[i] = Some(idx);
        Ok(true)
    }

    pub(crate) fn get(&self, letter: char) -> Option<usize> {
        slot(letter).and_then(|i| self.slots[i])
    }
}

impl Default for ShortTable {
    fn default() -> Self {
        Self::new()
    }
}
