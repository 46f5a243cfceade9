//! API request and response types

pub mod extract;
pub mod response;

pub use extract::ApiPath;
pub use response::DataResponse;
