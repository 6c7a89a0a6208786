pub(crate) mod breakdown;
pub(crate) mod dashboard;
pub(crate) mod transactions;
