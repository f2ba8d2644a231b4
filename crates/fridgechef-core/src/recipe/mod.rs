//! Recipe domain module.
//!
//! - `model`: recipe records as returned by the catalog (`Recipe`, `RecipeSummary`)
//! - `catalog`: the read-only catalog gateway trait (`RecipeCatalog`)

mod catalog;
mod model;

pub use catalog::RecipeCatalog;
pub use model::{Recipe, RecipeId, RecipeSummary};
