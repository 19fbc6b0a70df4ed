//! # itemapi-domain
//!
//! Pure domain model for the itemapi service.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`ItemId`](id::ItemId) and the
//!   [`ValidationError`](error::ValidationError) convention
//! - Define the **Item** resource (`id`, `name`, `value`)
//! - Enforce the shape invariant: an item exists only when every field is
//!   present and type-correct
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from adapters or IO crates.

pub mod error;
pub mod id;

pub mod item;
