pub mod account;
pub mod bank;
pub mod ledger;
pub mod session;
pub mod username;
