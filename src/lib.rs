//! Catalog administration backend.
//!
//! CRUD services over categories and products. Services are generic over the
//! repository traits in [`repository`] and translate store failures into
//! [`services::ServiceError`]. With the `server` feature the crate also ships
//! the actix-web JSON routes and the binary that serves them.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;
