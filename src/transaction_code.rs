//! Detail record transaction codes.

use crate::error::{AbaError, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Two-digit code classifying a detail record as a credit or a debit.
///
/// Only the codes below exist; there is no way to build any other value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransactionCode {
    /// 13, the only debit code.
    ExternalDebit = 13,
    ExternalCredit = 50,
    AustralianGovernmentSecurityInterest = 51,
    FamilyAllowance = 52,
    Pay = 53,
    Pension = 54,
    Allotment = 55,
    Dividend = 56,
    DebentureInterest = 57,
}

impl TransactionCode {
    /// Every code, in numeric order.
    pub const ALL: [TransactionCode; 9] = [
        TransactionCode::ExternalDebit,
        TransactionCode::ExternalCredit,
        TransactionCode::AustralianGovernmentSecurityInterest,
        TransactionCode::FamilyAllowance,
        TransactionCode::Pay,
        TransactionCode::Pension,
        TransactionCode::Allotment,
        TransactionCode::Dividend,
        TransactionCode::DebentureInterest,
    ];

    const CREDIT_CODES: [TransactionCode; 8] = [
        TransactionCode::ExternalCredit,
        TransactionCode::AustralianGovernmentSecurityInterest,
        TransactionCode::FamilyAllowance,
        TransactionCode::Pay,
        TransactionCode::Pension,
        TransactionCode::Allotment,
        TransactionCode::Dividend,
        TransactionCode::DebentureInterest,
    ];

    const DEBIT_CODES: [TransactionCode; 1] = [TransactionCode::ExternalDebit];

    /// Numeric value written to the detail line.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn is_credit(self) -> bool {
        Self::CREDIT_CODES.contains(&self)
    }

    pub fn is_debit(self) -> bool {
        Self::DEBIT_CODES.contains(&self)
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            TransactionCode::ExternalDebit => "External Debit",
            TransactionCode::ExternalCredit => "External Credit",
            TransactionCode::AustralianGovernmentSecurityInterest => {
                "Australian Government Security Interest"
            }
            TransactionCode::FamilyAllowance => "Family Allowance",
            TransactionCode::Pay => "Pay",
            TransactionCode::Pension => "Pension",
            TransactionCode::Allotment => "Allotment",
            TransactionCode::Dividend => "Dividend",
            TransactionCode::DebentureInterest => "Debenture Interest",
        }
    }
}

impl TryFrom<u8> for TransactionCode {
    type Error = AbaError;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| {
                AbaError::validation("transaction_code", format!("{} is not a known code", code))
            })
    }
}

impl FromStr for TransactionCode {
    type Err = AbaError;

    /// Accepts the numeric code (`"53"`) or a name (`"pay"`, `"External Debit"`).
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return TransactionCode::try_from(code);
        }

        let key: String = trimmed
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "externaldebit" | "debit" => Ok(TransactionCode::ExternalDebit),
            "externalcredit" | "credit" => Ok(TransactionCode::ExternalCredit),
            "australiangovernmentsecurityinterest" | "governmentsecurityinterest" => {
                Ok(TransactionCode::AustralianGovernmentSecurityInterest)
            }
            "familyallowance" => Ok(TransactionCode::FamilyAllowance),
            "pay" => Ok(TransactionCode::Pay),
            "pension" => Ok(TransactionCode::Pension),
            "allotment" => Ok(TransactionCode::Allotment),
            "dividend" => Ok(TransactionCode::Dividend),
            "debentureinterest" | "debenture" => Ok(TransactionCode::DebentureInterest),
            _ => Err(AbaError::validation(
                "transaction_code",
                format!("{:?} is not a known code", trimmed),
            )),
        }
    }
}

impl fmt::Display for TransactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.code())
    }
}

impl<'de> Deserialize<'de> for TransactionCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TransactionCode::from_str(&s).map_err(serde::de::Error::custom)
    }
}
