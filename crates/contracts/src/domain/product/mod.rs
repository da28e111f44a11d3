pub mod aggregate;
pub mod catalog;
pub mod validate;

pub use aggregate::{merge_tags, Product, ProductDraft, ProductId};
