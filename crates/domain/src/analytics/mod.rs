pub mod aggregate;
pub mod sort;
pub mod summary;
pub mod views;

pub use aggregate::{Aggregator, ContinentGroup};
pub use sort::{SortOrder, SortSpec, SortStrategy};
pub use summary::Summary;
pub use views::DashboardViews;
