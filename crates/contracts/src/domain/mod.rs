pub mod error;
pub mod product;
