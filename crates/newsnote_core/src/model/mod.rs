//! Domain records shared by repositories and services.
//!
//! # Responsibility
//! - Define the canonical shapes for users, notes, news and comments.
//! - Keep identity and ownership fields explicit in every record.
//!
//! # Invariants
//! - `UserId` values are issued by the identity collaborator and never
//!   minted by business logic outside the user repository.
//! - Note/news/comment row ids are storage rowids and reflect insertion
//!   order; listing code relies on them for stable tie-breaks.

pub mod comment;
pub mod news;
pub mod note;
pub mod user;
