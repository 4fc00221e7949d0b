mod bulk_load;
mod ledger;
mod search;

pub use bulk_load::RunRecord;
pub use ledger::Ledger;
pub use search::{insertion_point_by, search_first_by};
