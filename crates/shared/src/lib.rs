pub mod catalog;
pub mod models;
pub mod normalize;
pub mod selection;
pub mod style;
