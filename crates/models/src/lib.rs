//! SeaORM entities for the four catalogue tables and the connection helpers.
//!
//! The entity `Model`s double as the JSON shape exchanged over HTTP.

pub mod db;
pub mod customer;
pub mod product;
pub mod service;
pub mod vendor;

#[cfg(test)]
mod tests;
