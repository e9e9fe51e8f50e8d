use std::fmt;
use std::io::{self, Write};

use crate::engine::mask_account_number;

/// A normalized operation ready for display.
/// All fields are text; anything missing in the source is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    pub(crate) id: String,
    pub(crate) state: String,
    pub(crate) date: String,
    pub(crate) amount: String,
    pub(crate) currency: String,
    pub(crate) description: String,
    pub(crate) from_account: String,
    pub(crate) to_account: String,
}

impl Transaction {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// `DD.MM.YYYY`, or empty when the source date was unusable.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn from_account(&self) -> &str {
        &self.from_account
    }

    pub fn to_account(&self) -> &str {
        &self.to_account
    }

    /// Prints the transaction to stdout.
    pub fn display(&self) {
        print!("{self}");
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

/// Three lines of text followed by a blank separator line.
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.date, self.description)?;
        writeln!(
            f,
            "{} -> {}",
            mask_account_number(&self.from_account),
            mask_account_number(&self.to_account)
        )?;
        writeln!(f, "{} {}", self.amount, self.currency)?;
        writeln!(f)
    }
}
