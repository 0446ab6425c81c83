pub mod category;
pub mod charts;
pub mod listing;
pub mod table;

pub use category::Category;
pub use listing::{ListingBatch, ListingRecord};
pub use table::Table;
