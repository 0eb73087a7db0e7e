//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for data access.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for collection-level CRUD
///
/// Update and delete report how many entities they touched; zero is not an error.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Partial-update payload understood by `update`
    type Patch: Send + Sync;

    /// Append a new entity
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// List all entities in stored order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Shallow-merge `patch` into every entity with this ID
    async fn update(&self, id: &T::Id, patch: &Self::Patch) -> DomainResult<usize>;

    /// Remove every entity with this ID
    async fn delete(&self, id: &T::Id) -> DomainResult<usize>;
}
