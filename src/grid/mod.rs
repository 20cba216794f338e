pub mod layer;
pub mod search;

pub use layer::Layer2d;
pub use search::SearchGrid;
