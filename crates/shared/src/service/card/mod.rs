pub mod command;
pub mod issuance;
pub mod query;
