//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod json_store;
mod todo_repo;


pub use traits::Repository;
pub use json_store::JsonStore;
pub use todo_repo::TodoRepository;
