//! Store module: a store is a named container of items.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::StoreService;
