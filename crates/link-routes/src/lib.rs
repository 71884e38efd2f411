//! Static deep-link route table for the wallet.
//!
//! This crate provides:
//! - The fixed set of recognized deep-link paths and their handlers
//! - Typed query-parameter access with recoverable parse errors
//! - The [`Destination`] values the host navigation layer consumes

pub mod destination;
pub mod error;
pub mod params;
pub mod table;

pub use destination::Destination;
pub use error::RouteError;
pub use params::QueryParams;
pub use table::{lookup, registered_paths, RouteHandler};
