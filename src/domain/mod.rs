pub mod access;
pub mod billing;
pub mod catalog;
pub mod orders;
