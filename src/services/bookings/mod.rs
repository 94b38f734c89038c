pub mod export;
pub mod filter;
pub mod generator;
pub mod paginate;
pub mod stats;
pub mod store;

pub use filter::{apply_filters, DateRange, FilterConfig, SortBy};
pub use paginate::{paginate, Page, PAGE_SIZE};
pub use stats::{compute_stats, BookingStats};
pub use store::{BookingSource, BookingStore, LoadHandle, LoadState};
