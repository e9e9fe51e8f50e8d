mod date;
mod feed;
mod mask;
mod record;
mod transaction;

pub use date::parse_date;
pub use feed::{DISPLAY_LIMIT, Feed, load_records};
pub use mask::mask_account_number;
pub use record::{InputRecord, text_of};
pub use transaction::Transaction;
