mod in_memory_state_store;
mod sql_state_store;

pub use in_memory_state_store::InMemoryStateStore;
pub use sql_state_store::SqlStateStore;
