pub mod address;
pub mod filter;
pub mod matcher;
