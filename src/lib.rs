//! # Cemtext ABA
//!
//! Writes Cemtext ABA files, the fixed-width batch format Australian
//! financial institutions accept for direct-entry payments.
//!
//! ## Design Principles
//!
//! - **Integer cents**: every amount is a whole number of cents, never a float
//! - **Validated records**: fields are checked on assignment and again on encode
//! - **Derived totals**: the trailer always comes from the ledger's running sums
//! - **Byte-exact output**: 120-character records joined by CRLF
//!
//! ## Example
//!
//! ```no_run
//! use cemtext_aba::{input, AbaWriter, AmountFormat};
//! use std::fs::File;
//!
//! let header = input::read_header(File::open("header.csv").unwrap()).unwrap();
//! let details = input::read_details(File::open("details.csv").unwrap(), AmountFormat::Cents).unwrap();
//!
//! let mut writer = AbaWriter::new();
//! writer.set_header(header);
//! *writer.details_mut() = details;
//! writer.write_to(std::io::stdout()).unwrap();
//! ```

pub mod cents;
pub mod descriptive;
pub mod detail;
pub mod error;
pub mod field;
pub mod indicator;
pub mod input;
pub mod ledger;
pub mod record;
pub mod total;
pub mod transaction_code;
pub mod writer;

pub use cents::Cents;
pub use descriptive::{next_processing_date, DescriptiveFields, DescriptiveRecord};
pub use detail::{DetailFields, DetailRecord};
pub use error::{AbaError, Result};
pub use field::RECORD_LENGTH;
pub use indicator::Indicator;
pub use input::AmountFormat;
pub use ledger::DetailLedger;
pub use record::AbaRecord;
pub use total::TotalRecord;
pub use transaction_code::TransactionCode;
pub use writer::{content_disposition, AbaWriter, CONTENT_TYPE, LINE_SEPARATOR};
