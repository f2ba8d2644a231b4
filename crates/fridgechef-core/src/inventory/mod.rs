//! Inventory domain module.
//!
//! The refrigerator contents of each user are owned by an external store.
//! The assistant only asks two questions of it, see [`InventoryRepository`].

mod repository;

pub use repository::InventoryRepository;
