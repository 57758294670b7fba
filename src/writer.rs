//! Assembles header, detail and total records into an ABA payload.

use crate::descriptive::DescriptiveRecord;
use crate::detail::DetailRecord;
use crate::error::{AbaError, Result};
use crate::ledger::DetailLedger;
use crate::record::AbaRecord;
use crate::total::TotalRecord;
use log::{debug, warn};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Separator between records. The payload has no trailing terminator.
pub const LINE_SEPARATOR: &str = "\r\n";

/// MIME type for serving an ABA file over HTTP.
pub const CONTENT_TYPE: &str = "application/aba";

/// `Content-Disposition` header value that offers `filename` as a download.
pub fn content_disposition(filename: &str) -> String {
    format!("attachment; filename=\"{}\"", filename.replace('"', ""))
}

/// Builds an ABA file from a header and a ledger of detail records.
///
/// The total record is always derived from the ledger at render time.
///
/// # Examples
///
/// ```
/// use cemtext_aba::{
///     AbaWriter, Cents, DescriptiveFields, DescriptiveRecord, DetailFields, DetailRecord,
///     TransactionCode,
/// };
/// use chrono::NaiveDate;
///
/// let header = DescriptiveRecord::new(DescriptiveFields {
///     financial_institution: "BQL".to_string(),
///     user_preferred_specification: "MYSPEC".to_string(),
///     user_identification_number: 123,
///     description_of_file: "PAYROLL".to_string(),
///     date_to_process: NaiveDate::from_ymd_opt(2014, 3, 20),
///     ..Default::default()
/// })?;
///
/// let detail = DetailRecord::new(DetailFields {
///     bsb: "123-456".to_string(),
///     account_number: "000012345".to_string(),
///     transaction_code: TransactionCode::Pay,
///     amount: Cents::new(5000),
///     title_of_account: "J SMITH".to_string(),
///     trace_record_bsb: "987-654".to_string(),
///     trace_record_account_number: "0099999".to_string(),
///     name_of_remitter: "ACME".to_string(),
///     ..Default::default()
/// })?;
///
/// let mut writer = AbaWriter::new();
/// writer.set_header(header).add_detail(detail);
///
/// let payload = writer.render()?;
/// assert_eq!(payload.split("\r\n").count(), 3);
/// # Ok::<(), cemtext_aba::AbaError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AbaWriter {
    header: Option<DescriptiveRecord>,
    details: DetailLedger,
    total: Option<TotalRecord>,
}

impl AbaWriter {
    /// Creates a writer with no header and no details.
    pub fn new() -> Self {
        AbaWriter::default()
    }

    pub fn set_header(&mut self, header: DescriptiveRecord) -> &mut Self {
        self.header = Some(header);
        self
    }

    pub fn header(&self) -> Option<&DescriptiveRecord> {
        self.header.as_ref()
    }

    pub fn header_mut(&mut self) -> Option<&mut DescriptiveRecord> {
        self.header.as_mut()
    }

    /// Appends a detail record to the ledger.
    pub fn add_detail(&mut self, detail: DetailRecord) -> &mut Self {
        self.details.push(detail);
        self
    }

    /// Empties the ledger.
    pub fn clear_details(&mut self) -> &mut Self {
        self.details.clear();
        self
    }

    pub fn details(&self) -> &DetailLedger {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut DetailLedger {
        &mut self.details
    }

    /// Parks a caller-built total. [`render`](Self::render) replaces it.
    pub fn set_total(&mut self, total: TotalRecord) -> &mut Self {
        self.total = Some(total);
        self
    }

    pub fn total(&self) -> Option<&TotalRecord> {
        self.total.as_ref()
    }

    /// Derives the total record from the ledger and stores it.
    pub fn generate_total(&mut self) -> &TotalRecord {
        self.total.insert(self.details.build_total())
    }

    /// Renders the whole file as CRLF-joined lines.
    ///
    /// Fails with [`AbaError::NoHeader`] if no header has been set, and with
    /// a validation error if any record cannot be encoded.
    pub fn render(&mut self) -> Result<String> {
        let header = self.header.as_ref().ok_or(AbaError::NoHeader)?.encode()?;
        let total = self.generate_total().encode()?;

        let mut lines = Vec::with_capacity(self.details.len() + 2);
        lines.push(header);
        for detail in &self.details {
            lines.push(detail.encode()?);
        }
        lines.push(total);

        if self.details.credit_total() != self.details.debit_total() {
            warn!(
                "File is unbalanced: credits {} cents, debits {} cents",
                self.details.credit_total(),
                self.details.debit_total()
            );
        }
        debug!("Rendered ABA file with {} detail records", self.details.len());

        Ok(lines.join(LINE_SEPARATOR))
    }

    /// Renders and writes the payload verbatim to `writer`.
    pub fn write_to<W: Write>(&mut self, mut writer: W) -> Result<()> {
        let payload = self.render()?;
        writer.write_all(payload.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Renders and saves the payload to `path`.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let payload = self.render()?;
        fs::write(path.as_ref(), payload)?;
        debug!("Saved ABA file to {}", path.as_ref().display());
        Ok(())
    }
}
