//! Detail record: one line per credit or debit instruction.

use crate::cents::Cents;
use crate::error::{AbaError, Result};
use crate::field::{
    check_account_number, check_bsb, check_not_blank, check_printable, max_for_width,
    normalize_account_number, normalize_bsb, FixedWidthLine, ACCOUNT_NUMBER_WIDTH,
};
use crate::indicator::Indicator;
use crate::record::AbaRecord;
use crate::transaction_code::TransactionCode;

const AMOUNT_WIDTH: u32 = 10;
const WITHHOLDING_TAX_WIDTH: u32 = 8;

/// Field values for [`DetailRecord::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFields {
    pub bsb: String,
    pub account_number: String,
    pub indicator: Indicator,
    pub transaction_code: TransactionCode,
    pub amount: Cents,
    pub title_of_account: String,
    pub lodgement_reference: String,
    pub trace_record_bsb: String,
    pub trace_record_account_number: String,
    pub name_of_remitter: String,
    pub amount_of_withholding_tax: Cents,
}

impl Default for DetailFields {
    fn default() -> Self {
        DetailFields {
            bsb: String::new(),
            account_number: String::new(),
            indicator: Indicator::None,
            transaction_code: TransactionCode::ExternalCredit,
            amount: Cents::ZERO,
            title_of_account: String::new(),
            lodgement_reference: String::new(),
            trace_record_bsb: String::new(),
            trace_record_account_number: String::new(),
            name_of_remitter: String::new(),
            amount_of_withholding_tax: Cents::ZERO,
        }
    }
}

/// A single transaction in an ABA file.
///
/// Every setter validates its value before storing it, and [`encode`]
/// runs the same checks again, so a record that exists is always
/// renderable.
///
/// [`encode`]: AbaRecord::encode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRecord {
    bsb: String,
    account_number: String,
    indicator: Indicator,
    transaction_code: TransactionCode,
    amount: Cents,
    title_of_account: String,
    lodgement_reference: String,
    trace_record_bsb: String,
    trace_record_account_number: String,
    name_of_remitter: String,
    amount_of_withholding_tax: Cents,
}

impl DetailRecord {
    /// Builds a detail record, validating every field.
    pub fn new(fields: DetailFields) -> Result<Self> {
        let record = DetailRecord {
            bsb: fields.bsb,
            account_number: fields.account_number,
            indicator: fields.indicator,
            transaction_code: fields.transaction_code,
            amount: fields.amount,
            title_of_account: fields.title_of_account,
            lodgement_reference: fields.lodgement_reference,
            trace_record_bsb: fields.trace_record_bsb,
            trace_record_account_number: fields.trace_record_account_number,
            name_of_remitter: fields.name_of_remitter,
            amount_of_withholding_tax: fields.amount_of_withholding_tax,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn bsb(&self) -> &str {
        &self.bsb
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn transaction_code(&self) -> TransactionCode {
        self.transaction_code
    }

    pub fn amount(&self) -> Cents {
        self.amount
    }

    pub fn title_of_account(&self) -> &str {
        &self.title_of_account
    }

    pub fn lodgement_reference(&self) -> &str {
        &self.lodgement_reference
    }

    pub fn trace_record_bsb(&self) -> &str {
        &self.trace_record_bsb
    }

    pub fn trace_record_account_number(&self) -> &str {
        &self.trace_record_account_number
    }

    pub fn name_of_remitter(&self) -> &str {
        &self.name_of_remitter
    }

    pub fn amount_of_withholding_tax(&self) -> Cents {
        self.amount_of_withholding_tax
    }

    pub fn is_credit(&self) -> bool {
        self.transaction_code.is_credit()
    }

    pub fn is_debit(&self) -> bool {
        self.transaction_code.is_debit()
    }

    pub fn set_bsb(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        let value = value.into();
        check_bsb("bsb", &value)?;
        self.bsb = value;
        Ok(self)
    }

    pub fn set_account_number(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        let value = value.into();
        check_account_number("account_number", &value)?;
        self.account_number = value;
        Ok(self)
    }

    pub fn set_indicator(&mut self, value: Indicator) -> &mut Self {
        self.indicator = value;
        self
    }

    pub fn set_transaction_code(&mut self, value: TransactionCode) -> &mut Self {
        self.transaction_code = value;
        self
    }

    pub fn set_amount(&mut self, value: Cents) -> Result<&mut Self> {
        check_amount("amount", value, AMOUNT_WIDTH)?;
        self.amount = value;
        Ok(self)
    }

    pub fn set_title_of_account(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        let value = value.into();
        check_not_blank("title_of_account", &value)?;
        self.title_of_account = value;
        Ok(self)
    }

    /// May be blank.
    pub fn set_lodgement_reference(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        let value = value.into();
        check_printable("lodgement_reference", &value)?;
        self.lodgement_reference = value;
        Ok(self)
    }

    pub fn set_trace_record_bsb(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        let value = value.into();
        check_bsb("trace_record_bsb", &value)?;
        self.trace_record_bsb = value;
        Ok(self)
    }

    pub fn set_trace_record_account_number(
        &mut self,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        let value = value.into();
        check_account_number("trace_record_account_number", &value)?;
        self.trace_record_account_number = value;
        Ok(self)
    }

    pub fn set_name_of_remitter(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        let value = value.into();
        check_not_blank("name_of_remitter", &value)?;
        self.name_of_remitter = value;
        Ok(self)
    }

    pub fn set_amount_of_withholding_tax(&mut self, value: Cents) -> Result<&mut Self> {
        check_amount("amount_of_withholding_tax", value, WITHHOLDING_TAX_WIDTH)?;
        self.amount_of_withholding_tax = value;
        Ok(self)
    }
}

fn check_amount(field: &'static str, value: Cents, width: u32) -> Result<()> {
    if value.get() > max_for_width(width) {
        return Err(AbaError::validation(
            field,
            format!("{} cents does not fit in {} digits", value, width),
        ));
    }
    Ok(())
}

impl AbaRecord for DetailRecord {
    const RECORD_TYPE: char = '1';

    fn validate(&self) -> Result<()> {
        check_bsb("bsb", &self.bsb)?;
        check_account_number("account_number", &self.account_number)?;
        check_amount("amount", self.amount, AMOUNT_WIDTH)?;
        check_not_blank("title_of_account", &self.title_of_account)?;
        check_printable("lodgement_reference", &self.lodgement_reference)?;
        check_bsb("trace_record_bsb", &self.trace_record_bsb)?;
        check_account_number(
            "trace_record_account_number",
            &self.trace_record_account_number,
        )?;
        check_not_blank("name_of_remitter", &self.name_of_remitter)?;
        check_amount(
            "amount_of_withholding_tax",
            self.amount_of_withholding_tax,
            WITHHOLDING_TAX_WIDTH,
        )?;
        Ok(())
    }

    fn encode(&self) -> Result<String> {
        self.validate()?;

        let line = FixedWidthLine::new(Self::RECORD_TYPE)
            .left(&normalize_bsb(&self.bsb), 7)
            .right(
                &normalize_account_number(&self.account_number),
                ACCOUNT_NUMBER_WIDTH,
            )
            .literal(&self.indicator.to_string())
            .literal(&self.transaction_code.to_string())
            .number("amount", self.amount.get(), AMOUNT_WIDTH as usize)?
            .left(&self.title_of_account, 32)
            .left(self.lodgement_reference.trim(), 18)
            .left(&normalize_bsb(&self.trace_record_bsb), 7)
            .right(
                &normalize_account_number(&self.trace_record_account_number),
                ACCOUNT_NUMBER_WIDTH,
            )
            .left(&self.name_of_remitter, 16)
            .number(
                "amount_of_withholding_tax",
                self.amount_of_withholding_tax.get(),
                WITHHOLDING_TAX_WIDTH as usize,
            )?;

        Ok(line.finish())
    }
}
