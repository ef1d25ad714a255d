pub mod apply;
pub mod compare;
pub mod config;
pub mod quote;
pub mod version;
