mod raw_table;
mod transaction;

pub use raw_table::RawTable;
pub use transaction::{Kind, Transaction};

#[cfg(test)]
mod tests;
