pub mod account;
pub mod project;
