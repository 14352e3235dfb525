pub mod file;
pub mod kv;
pub mod snapshot;
