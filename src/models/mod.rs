pub mod amiibo;
pub mod catalog;
pub mod dates;
pub mod response;

pub use amiibo::*;
pub use catalog::*;
pub use response::*;
