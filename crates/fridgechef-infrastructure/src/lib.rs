//! File-backed collaborators and configuration loading for Fridgechef.

pub mod config_service;
pub mod dto;
pub mod paths;
pub mod toml_inventory_repository;
pub mod toml_recipe_catalog;

pub use crate::config_service::ConfigService;
pub use crate::paths::FridgePaths;
pub use crate::toml_inventory_repository::TomlInventoryRepository;
pub use crate::toml_recipe_catalog::TomlRecipeCatalog;
