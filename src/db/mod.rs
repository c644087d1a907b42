pub mod connection;
pub mod local_storage;

pub use connection::{init_db, Database};
pub use local_storage::{KeyValueStorage, MemoryStorage};
