//! # miniwiki-core
//!
//! Core library for the miniwiki page server.
//!
//! This crate provides the page model, the filesystem-backed page store,
//! the wiki-link renderer, and the route matcher shared by the HTTP
//! front end.

pub mod page;
pub mod render;
pub mod route;
pub mod store;

pub use page::Page;
pub use render::expand_links;
pub use route::{match_path, RouteMatch, RouteVerb};
pub use store::{PageStore, StoreError};
