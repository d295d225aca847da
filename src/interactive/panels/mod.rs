pub mod detail;
pub mod header;
pub mod list;
