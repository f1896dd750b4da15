pub mod abstract_trait;
pub mod config;
pub mod domain;
pub mod errors;
pub mod model;
pub mod repository;
pub mod service;
#[cfg(test)]
pub(crate) mod test_support;
pub mod utils;
