//! Owner-scoped todo persistence and API handlers.
//!
//! Every operation in this crate is predicated on the acting owner's
//! identity: reads, updates, and deletes carry `owner_id` in their
//! WHERE clause, so a record belonging to another user is
//! indistinguishable from one that does not exist. Ownership is
//! stamped once at creation and never reassigned.
//!
//! ## Core Types
//!
//! - [`Todo`] — Task record with store-assigned id and owner stamp
//! - [`TodoRequest`] / [`TodoView`] — Wire representations
//!
//! ## Persistence
//!
//! - [`TodoRepository`] — Owner-scoped CRUD on `Arc<Client>`
mod dto;
mod todo;

pub use dto::*;
pub use todo::*;

#[cfg(feature = "database")]
mod repository;
#[cfg(feature = "database")]
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
pub use handlers::*;
