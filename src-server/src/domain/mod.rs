//! Domain Layer
//!
//! Contains the todo entity and core abstractions.
//! No I/O happens here.

mod entity;
mod todo;

pub use entity::{Entity, DomainError, DomainResult};
pub use todo::{Todo, NewTodo, TodoPatch};
