//! Behaviour shared by the three record kinds.

use crate::error::Result;

/// A record that encodes to one fixed-width ABA line.
pub trait AbaRecord {
    /// Leading digit of the encoded line.
    const RECORD_TYPE: char;

    /// Re-checks every field the line layout depends on.
    fn validate(&self) -> Result<()>;

    /// Encodes the record as a 120-character line, without a terminator.
    fn encode(&self) -> Result<String>;
}
