pub mod close;
pub mod loan;
pub mod login;
pub mod sort;
pub mod transfer;
