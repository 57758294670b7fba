//! Descriptive (header) record.
//!
//! The first line of every ABA file. Carries the file-level metadata: which
//! institution the file is for, who the user is, and the day it should be
//! processed.

use crate::error::{AbaError, Result};
use crate::field::{check_not_blank, FixedWidthLine};
use crate::record::AbaRecord;
use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime, Timelike};
use log::debug;

/// Last hour of the day (24h clock) that still processes on the same day.
const PROCESSING_CUTOFF_HOUR: u32 = 17;

const MAX_REEL_SEQUENCE_NUMBER: u8 = 99;
const MAX_USER_IDENTIFICATION_NUMBER: u32 = 999_999;

/// Field values for [`DescriptiveRecord::new`].
///
/// `reel_sequence_number` defaults to 1 and a missing `date_to_process` is
/// filled in by [`next_processing_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptiveFields {
    pub financial_institution: String,
    pub user_preferred_specification: String,
    pub user_identification_number: u32,
    pub description_of_file: String,
    pub reel_sequence_number: u8,
    pub date_to_process: Option<NaiveDate>,
}

impl Default for DescriptiveFields {
    fn default() -> Self {
        DescriptiveFields {
            financial_institution: String::new(),
            user_preferred_specification: String::new(),
            user_identification_number: 0,
            description_of_file: String::new(),
            reel_sequence_number: 1,
            date_to_process: None,
        }
    }
}

/// The header record of an ABA file.
///
/// # Invariants
///
/// - `financial_institution` is exactly three ASCII letters
/// - `user_preferred_specification` and `description_of_file` are non-blank
/// - `reel_sequence_number` is in `1..=99`
/// - `user_identification_number` is in `0..=999999`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptiveRecord {
    reel_sequence_number: u8,
    financial_institution: String,
    user_preferred_specification: String,
    user_identification_number: u32,
    description_of_file: String,
    date_to_process: NaiveDate,
}

impl DescriptiveRecord {
    /// Builds a header, validating every field.
    ///
    /// If no process date is given, one is guessed from the current local
    /// time.
    pub fn new(fields: DescriptiveFields) -> Result<Self> {
        let record = DescriptiveRecord {
            reel_sequence_number: fields.reel_sequence_number,
            financial_institution: fields.financial_institution,
            user_preferred_specification: fields.user_preferred_specification,
            user_identification_number: fields.user_identification_number,
            description_of_file: fields.description_of_file,
            date_to_process: fields
                .date_to_process
                .unwrap_or_else(|| next_processing_date(Local::now().naive_local())),
        };
        record.validate()?;
        Ok(record)
    }

    pub fn reel_sequence_number(&self) -> u8 {
        self.reel_sequence_number
    }

    pub fn financial_institution(&self) -> &str {
        &self.financial_institution
    }

    pub fn user_preferred_specification(&self) -> &str {
        &self.user_preferred_specification
    }

    pub fn user_identification_number(&self) -> u32 {
        self.user_identification_number
    }

    pub fn description_of_file(&self) -> &str {
        &self.description_of_file
    }

    pub fn date_to_process(&self) -> NaiveDate {
        self.date_to_process
    }

    pub fn set_reel_sequence_number(&mut self, value: u8) -> Result<&mut Self> {
        check_reel_sequence_number(value)?;
        self.reel_sequence_number = value;
        Ok(self)
    }

    pub fn set_financial_institution(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        let value = value.into();
        check_financial_institution(&value)?;
        self.financial_institution = value;
        Ok(self)
    }

    pub fn set_user_preferred_specification(
        &mut self,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        let value = value.into();
        check_not_blank("user_preferred_specification", &value)?;
        self.user_preferred_specification = value;
        Ok(self)
    }

    pub fn set_user_identification_number(&mut self, value: u32) -> Result<&mut Self> {
        check_user_identification_number(value)?;
        self.user_identification_number = value;
        Ok(self)
    }

    pub fn set_description_of_file(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        let value = value.into();
        check_not_blank("description_of_file", &value)?;
        self.description_of_file = value;
        Ok(self)
    }

    pub fn set_date_to_process(&mut self, date: NaiveDate) -> &mut Self {
        self.date_to_process = date;
        self
    }

    /// Advances the reel sequence number, wrapping from 99 back to 1.
    pub fn inc_reel_sequence_number(&mut self) -> &mut Self {
        self.reel_sequence_number = if self.reel_sequence_number >= MAX_REEL_SEQUENCE_NUMBER {
            1
        } else {
            self.reel_sequence_number + 1
        };
        self
    }

    /// Replaces the process date with a guess based on the current local time.
    pub fn guess_date_to_process(&mut self) -> &mut Self {
        self.guess_date_to_process_at(Local::now().naive_local())
    }

    /// Replaces the process date with a guess based on `now`.
    pub fn guess_date_to_process_at(&mut self, now: NaiveDateTime) -> &mut Self {
        self.date_to_process = next_processing_date(now);
        debug!("Guessed process date {} from {}", self.date_to_process, now);
        self
    }
}

/// Picks the first day a file prepared at `now` can be processed.
///
/// After 17:59 the file rolls to the next day; a Saturday or Sunday then
/// rolls forward to Monday.
pub fn next_processing_date(now: NaiveDateTime) -> NaiveDate {
    let mut date = now.date();
    if now.hour() > PROCESSING_CUTOFF_HOUR {
        date = date + Days::new(1);
    }

    let weekday = date.weekday().number_from_monday();
    if weekday > 5 {
        date = date + Days::new(u64::from(8 - weekday));
    }
    date
}

fn check_reel_sequence_number(value: u8) -> Result<()> {
    if (1..=MAX_REEL_SEQUENCE_NUMBER).contains(&value) {
        Ok(())
    } else {
        Err(AbaError::validation(
            "reel_sequence_number",
            format!("{} is outside 1..=99", value),
        ))
    }
}

fn check_user_identification_number(value: u32) -> Result<()> {
    if value <= MAX_USER_IDENTIFICATION_NUMBER {
        Ok(())
    } else {
        Err(AbaError::validation(
            "user_identification_number",
            format!("{} is outside 0..=999999", value),
        ))
    }
}

fn check_financial_institution(value: &str) -> Result<()> {
    if value.len() == 3 && value.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(AbaError::validation(
            "financial_institution",
            format!("{:?} must be 3 letters, eg BQL, WBC", value),
        ))
    }
}

impl AbaRecord for DescriptiveRecord {
    const RECORD_TYPE: char = '0';

    fn validate(&self) -> Result<()> {
        check_reel_sequence_number(self.reel_sequence_number)?;
        check_financial_institution(&self.financial_institution)?;
        check_not_blank(
            "user_preferred_specification",
            &self.user_preferred_specification,
        )?;
        check_user_identification_number(self.user_identification_number)?;
        check_not_blank("description_of_file", &self.description_of_file)?;
        Ok(())
    }

    fn encode(&self) -> Result<String> {
        self.validate()?;

        let line = FixedWidthLine::new(Self::RECORD_TYPE)
            .blank(17)
            .number(
                "reel_sequence_number",
                u64::from(self.reel_sequence_number % 100),
                2,
            )?
            .left(&self.financial_institution.to_uppercase(), 3)
            .blank(7)
            .left(&self.user_preferred_specification.to_uppercase(), 26)
            .number(
                "user_identification_number",
                u64::from(self.user_identification_number % 1_000_000),
                6,
            )?
            .left(&self.description_of_file.to_uppercase(), 12)
            .left(&self.date_to_process.format("%d%m%y").to_string(), 6)
            .blank(40);

        Ok(line.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn day(date: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
    }

    fn header() -> DescriptiveRecord {
        DescriptiveRecord::new(DescriptiveFields {
            financial_institution: "bql".to_string(),
            user_preferred_specification: "My Spec".to_string(),
            user_identification_number: 123,
            description_of_file: "Payroll".to_string(),
            date_to_process: Some(day("2014-03-20")),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_encode_layout() {
        let line = header().encode().unwrap();

        let expected = format!(
            "0{}01BQL{}{}000123{}200314{}",
            " ".repeat(17),
            " ".repeat(7),
            format!("{:<26}", "MY SPEC"),
            format!("{:<12}", "PAYROLL"),
            " ".repeat(40)
        );
        assert_eq!(line, expected);
        assert_eq!(line.len(), 120);
    }

    #[test]
    fn test_encode_truncates_long_text() {
        let mut record = header();
        record
            .set_user_preferred_specification("abcdefghijklmnopqrstuvwxyz0123")
            .unwrap()
            .set_description_of_file("a very long description")
            .unwrap();

        let line = record.encode().unwrap();
        assert_eq!(line.len(), 120);
        assert_eq!(&line[30..56], "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(&line[62..74], "A VERY LONG ");
    }

    #[test]
    fn test_defaults() {
        let record = header();
        assert_eq!(record.reel_sequence_number(), 1);
        assert_eq!(record.financial_institution(), "bql");
        assert_eq!(record.date_to_process(), day("2014-03-20"));
    }

    #[test]
    fn test_missing_date_is_guessed_as_a_weekday() {
        let record = DescriptiveRecord::new(DescriptiveFields {
            financial_institution: "WBC".to_string(),
            user_preferred_specification: "SPEC".to_string(),
            description_of_file: "DESC".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert!(record.date_to_process().weekday().number_from_monday() <= 5);
    }

    #[test]
    fn test_new_rejects_invalid_fields() {
        let base = DescriptiveFields {
            financial_institution: "BQL".to_string(),
            user_preferred_specification: "SPEC".to_string(),
            description_of_file: "DESC".to_string(),
            date_to_process: Some(day("2014-03-20")),
            ..Default::default()
        };

        let cases = [
            DescriptiveFields {
                financial_institution: "BQLX".to_string(),
                ..base.clone()
            },
            DescriptiveFields {
                financial_institution: "BQ".to_string(),
                ..base.clone()
            },
            DescriptiveFields {
                user_preferred_specification: "   ".to_string(),
                ..base.clone()
            },
            DescriptiveFields {
                description_of_file: String::new(),
                ..base.clone()
            },
            DescriptiveFields {
                reel_sequence_number: 0,
                ..base.clone()
            },
            DescriptiveFields {
                user_identification_number: 1_000_000,
                ..base.clone()
            },
        ];

        for fields in cases {
            let err = DescriptiveRecord::new(fields.clone()).unwrap_err();
            assert!(err.is_validation(), "{:?}", fields);
        }
        assert!(DescriptiveRecord::new(base).is_ok());
    }

    #[test]
    fn test_setters_reject_and_keep_previous_value() {
        let mut record = header();

        assert!(record.set_financial_institution("B1L").is_err());
        assert!(record.set_reel_sequence_number(100).is_err());
        assert!(record.set_user_identification_number(1_000_000).is_err());
        assert!(record.set_description_of_file(" ").is_err());

        assert_eq!(record.financial_institution(), "bql");
        assert_eq!(record.reel_sequence_number(), 1);
        assert_eq!(record.user_identification_number(), 123);
        assert_eq!(record.description_of_file(), "Payroll");
    }

    #[test]
    fn test_setters_chain() {
        let mut record = header();
        record
            .set_financial_institution("WBC")
            .unwrap()
            .set_reel_sequence_number(7)
            .unwrap()
            .set_user_identification_number(999_999)
            .unwrap();

        let line = record.encode().unwrap();
        assert_eq!(&line[18..23], "07WBC");
        assert_eq!(&line[56..62], "999999");
    }

    #[test]
    fn test_inc_reel_sequence_number_wraps() {
        let mut record = header();
        record.inc_reel_sequence_number();
        assert_eq!(record.reel_sequence_number(), 2);

        record.set_reel_sequence_number(99).unwrap();
        record.inc_reel_sequence_number();
        assert_eq!(record.reel_sequence_number(), 1);
    }

    #[test]
    fn test_friday_evening_rolls_to_monday() {
        assert_eq!(
            next_processing_date(at("2014-03-21", "18:00:00")),
            day("2014-03-24")
        );
    }

    #[test]
    fn test_friday_before_cutoff_stays_friday() {
        assert_eq!(
            next_processing_date(at("2014-03-21", "17:59:59")),
            day("2014-03-21")
        );
    }

    #[test]
    fn test_weekend_rolls_to_monday() {
        assert_eq!(
            next_processing_date(at("2014-03-22", "09:00:00")),
            day("2014-03-24")
        );
        assert_eq!(
            next_processing_date(at("2014-03-23", "09:00:00")),
            day("2014-03-24")
        );
        assert_eq!(
            next_processing_date(at("2014-03-22", "20:00:00")),
            day("2014-03-24")
        );
    }

    #[test]
    fn test_weekday_evening_rolls_to_next_day() {
        assert_eq!(
            next_processing_date(at("2014-03-18", "19:30:00")),
            day("2014-03-19")
        );
    }

    #[test]
    fn test_guess_date_to_process_at() {
        let mut record = header();
        record.guess_date_to_process_at(at("2014-03-21", "18:00:00"));
        assert_eq!(record.date_to_process(), day("2014-03-24"));
    }
}
