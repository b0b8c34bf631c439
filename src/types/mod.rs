pub mod config;
pub mod errors;
pub mod journal;
pub mod keys;
pub mod note;
pub mod week;
