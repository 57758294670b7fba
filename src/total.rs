//! File total (trailer) record.

use crate::cents::Cents;
use crate::error::Result;
use crate::field::FixedWidthLine;
use crate::record::AbaRecord;

/// Aggregate totals written as the last line of an ABA file.
///
/// Normally produced by [`DetailLedger::build_total`] rather than built by
/// hand.
///
/// [`DetailLedger::build_total`]: crate::DetailLedger::build_total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TotalRecord {
    /// `|credit_total_amount - debit_total_amount|`.
    pub net_total_amount: Cents,

    /// Sum of all credit detail amounts.
    pub credit_total_amount: Cents,

    /// Sum of all debit detail amounts.
    pub debit_total_amount: Cents,

    /// Number of detail records.
    pub record_count: usize,
}

impl AbaRecord for TotalRecord {
    const RECORD_TYPE: char = '7';

    /// Width overflow is the only thing that can be wrong, and
    /// [`encode`](AbaRecord::encode) reports it field by field.
    fn validate(&self) -> Result<()> {
        self.encode().map(|_| ())
    }

    fn encode(&self) -> Result<String> {
        let line = FixedWidthLine::new(Self::RECORD_TYPE)
            .literal("999-999")
            .blank(12)
            .number("net_total_amount", self.net_total_amount.get(), 10)?
            .number("credit_total_amount", self.credit_total_amount.get(), 10)?
            .number("debit_total_amount", self.debit_total_amount.get(), 10)?
            .blank(24)
            .number("record_count", self.record_count as u64, 6)?
            .blank(40);

        Ok(line.finish())
    }
}
