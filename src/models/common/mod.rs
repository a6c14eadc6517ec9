pub mod enums;
pub mod pagination;
pub mod response;
pub mod sort;
pub mod stats;

pub use pagination::{PaginatedResponse, PaginationMeta, PaginationQuery};
pub use response::ApiResponse;
pub use sort::SortOrder;
