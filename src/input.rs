//! CSV input rows for headers and detail records.
//!
//! Rows are read as raw strings and converted into validated records. A bad
//! row fails the whole load; rows are never skipped.

use crate::cents::Cents;
use crate::descriptive::{DescriptiveFields, DescriptiveRecord};
use crate::detail::{DetailFields, DetailRecord};
use crate::error::{AbaError, Result};
use crate::indicator::Indicator;
use crate::ledger::DetailLedger;
use crate::transaction_code::TransactionCode;
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;

/// How amount columns are written in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountFormat {
    /// Whole cents, digits only: `5000`.
    #[default]
    Cents,
    /// Decimal dollars: `50.00`.
    Dollars,
}

impl AmountFormat {
    fn parse(self, value: &str) -> Result<Cents> {
        match self {
            AmountFormat::Cents => Cents::from_str(value),
            AmountFormat::Dollars => Cents::parse_dollars(value),
        }
    }
}

/// Raw header row as read from CSV.
#[derive(Debug, Deserialize)]
pub struct HeaderRow {
    pub financial_institution: String,
    pub user_preferred_specification: String,
    pub user_identification_number: u32,
    pub description_of_file: String,

    /// Defaults to 1 when absent.
    pub reel_sequence_number: Option<u8>,

    /// `YYYY-MM-DD`; guessed when absent.
    pub date_to_process: Option<String>,
}

impl HeaderRow {
    /// Converts the raw row into a validated header.
    pub fn parse(&self) -> Result<DescriptiveRecord> {
        let date_to_process = match self.date_to_process.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(date) => Some(NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
                AbaError::validation("date_to_process", format!("{:?}: {}", date, e))
            })?),
        };

        DescriptiveRecord::new(DescriptiveFields {
            financial_institution: self.financial_institution.clone(),
            user_preferred_specification: self.user_preferred_specification.clone(),
            user_identification_number: self.user_identification_number,
            description_of_file: self.description_of_file.clone(),
            reel_sequence_number: self.reel_sequence_number.unwrap_or(1),
            date_to_process,
        })
    }
}

/// Raw detail row as read from CSV.
///
/// `indicator`, `lodgement_reference` and `amount_of_withholding_tax` may be
/// left blank. Amounts stay raw because their format is chosen at load time.
#[derive(Debug, Deserialize)]
pub struct DetailRow {
    pub bsb: String,
    pub account_number: String,
    pub indicator: Option<Indicator>,
    pub transaction_code: TransactionCode,
    pub amount: String,
    pub title_of_account: String,
    pub lodgement_reference: Option<String>,
    pub trace_record_bsb: String,
    pub trace_record_account_number: String,
    pub name_of_remitter: String,
    pub amount_of_withholding_tax: Option<String>,
}

impl DetailRow {
    /// Converts the raw row into a validated detail record.
    pub fn parse(&self, amounts: AmountFormat) -> Result<DetailRecord> {
        let amount_of_withholding_tax = match self.amount_of_withholding_tax.as_deref() {
            Some(value) if !value.trim().is_empty() => amounts.parse(value)?,
            _ => Cents::ZERO,
        };

        DetailRecord::new(DetailFields {
            bsb: self.bsb.clone(),
            account_number: self.account_number.clone(),
            indicator: self.indicator.unwrap_or_default(),
            transaction_code: self.transaction_code,
            amount: amounts.parse(&self.amount)?,
            title_of_account: self.title_of_account.clone(),
            lodgement_reference: self.lodgement_reference.clone().unwrap_or_default(),
            trace_record_bsb: self.trace_record_bsb.clone(),
            trace_record_account_number: self.trace_record_account_number.clone(),
            name_of_remitter: self.name_of_remitter.clone(),
            amount_of_withholding_tax,
        })
    }
}

/// Reads the header from the first data row of a CSV file.
pub fn read_header<R: Read>(reader: R) -> Result<DescriptiveRecord> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let row = match csv_reader.deserialize::<HeaderRow>().next() {
        Some(result) => result?,
        None => {
            return Err(AbaError::InvalidRecord {
                row: 2,
                message: "header file has no data row".to_string(),
            })
        }
    };

    row.parse().map_err(|e| AbaError::InvalidRecord {
        row: 2,
        message: e.to_string(),
    })
}

/// Reads every detail row of a CSV file into a ledger.
pub fn read_details<R: Read>(reader: R, amounts: AmountFormat) -> Result<DetailLedger> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut ledger = DetailLedger::new();

    for (row_idx, result) in csv_reader.deserialize::<DetailRow>().enumerate() {
        let row_num = row_idx + 2; // 1-indexed, accounting for header row

        let record = result
            .map_err(AbaError::from)
            .and_then(|row| row.parse(amounts))
            .map_err(|e| AbaError::InvalidRecord {
                row: row_num,
                message: e.to_string(),
            })?;
        ledger.push(record);
    }

    debug!("Loaded {} detail records", ledger.len());
    Ok(ledger)
}
