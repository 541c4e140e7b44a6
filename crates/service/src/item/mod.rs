//! Item module: domain types, repository abstraction and the item service.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::ItemService;
