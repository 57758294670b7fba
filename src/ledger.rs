//! Ordered collection of detail records with running totals.
//!
//! Maintains the invariant: the running credit and debit totals equal the
//! sum of the current entries' amounts, split by classification, after
//! every mutation.

use crate::cents::Cents;
use crate::detail::DetailRecord;
use crate::error::{AbaError, Result};
use crate::total::TotalRecord;
use log::debug;

/// Detail records in insertion order, plus cached credit and debit sums.
///
/// # Invariants
///
/// - `credits == sum(amount)` over entries whose code is a credit
/// - `debits == sum(amount)` over entries whose code is a debit
///
/// Both sums are adjusted incrementally on every insert and removal rather
/// than recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailLedger {
    entries: Vec<DetailRecord>,
    credits: Cents,
    debits: Cents,
}

impl DetailLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        DetailLedger::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: DetailRecord) {
        self.apply(&record);
        debug!(
            "Added detail {} of {} cents at index {}",
            record.transaction_code(),
            record.amount(),
            self.entries.len()
        );
        self.entries.push(record);
    }

    /// Inserts a record at `index`, shifting later entries along.
    ///
    /// `index` may equal `len()` to append.
    pub fn insert(&mut self, index: usize, record: DetailRecord) -> Result<()> {
        if index > self.entries.len() {
            return Err(AbaError::NotFound {
                index,
                len: self.entries.len(),
            });
        }

        self.apply(&record);
        debug!(
            "Inserted detail {} of {} cents at index {}",
            record.transaction_code(),
            record.amount(),
            index
        );
        self.entries.insert(index, record);
        Ok(())
    }

    /// Replaces the record at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, record: DetailRecord) -> Result<DetailRecord> {
        if index >= self.entries.len() {
            return Err(AbaError::NotFound {
                index,
                len: self.entries.len(),
            });
        }

        self.apply(&record);
        let old = std::mem::replace(&mut self.entries[index], record);
        self.retract(&old);
        debug!("Replaced detail at index {}", index);
        Ok(old)
    }

    /// Removes and returns the record at `index`.
    pub fn remove(&mut self, index: usize) -> Result<DetailRecord> {
        if index >= self.entries.len() {
            return Err(AbaError::NotFound {
                index,
                len: self.entries.len(),
            });
        }

        let record = self.entries.remove(index);
        self.retract(&record);
        debug!(
            "Removed detail {} of {} cents from index {}",
            record.transaction_code(),
            record.amount(),
            index
        );
        Ok(record)
    }

    /// Removes every record and zeroes the totals.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.credits = Cents::ZERO;
        self.debits = Cents::ZERO;
    }

    pub fn get(&self, index: usize) -> Option<&DetailRecord> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All records in insertion order.
    pub fn export(&self) -> &[DetailRecord] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DetailRecord> {
        self.entries.iter()
    }

    /// Running sum of credit amounts.
    pub fn credit_total(&self) -> Cents {
        self.credits
    }

    /// Running sum of debit amounts.
    pub fn debit_total(&self) -> Cents {
        self.debits
    }

    /// Builds the trailer for the current contents.
    pub fn build_total(&self) -> TotalRecord {
        TotalRecord {
            net_total_amount: self.credits.abs_diff(self.debits),
            credit_total_amount: self.credits,
            debit_total_amount: self.debits,
            record_count: self.entries.len(),
        }
    }

    fn apply(&mut self, record: &DetailRecord) {
        if record.is_credit() {
            self.credits += record.amount();
        } else {
            self.debits += record.amount();
        }
    }

    fn retract(&mut self, record: &DetailRecord) {
        if record.is_credit() {
            self.credits -= record.amount();
        } else {
            self.debits -= record.amount();
        }
    }

    /// Verifies the running totals against a full recompute.
    #[cfg(test)]
    pub(crate) fn check_invariant(&self) -> bool {
        let credits: Cents = self
            .entries
            .iter()
            .filter(|r| r.is_credit())
            .map(DetailRecord::amount)
            .sum();
        let debits: Cents = self
            .entries
            .iter()
            .filter(|r| r.is_debit())
            .map(DetailRecord::amount)
            .sum();
        credits == self.credits && debits == self.debits
    }
}

impl Extend<DetailRecord> for DetailLedger {
    fn extend<I: IntoIterator<Item = DetailRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

impl FromIterator<DetailRecord> for DetailLedger {
    fn from_iter<I: IntoIterator<Item = DetailRecord>>(iter: I) -> Self {
        let mut ledger = DetailLedger::new();
        ledger.extend(iter);
        ledger
    }
}

impl<'a> IntoIterator for &'a DetailLedger {
    type Item = &'a DetailRecord;
    type IntoIter = std::slice::Iter<'a, DetailRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
