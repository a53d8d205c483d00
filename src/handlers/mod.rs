//! HTTP handlers: one per endpoint, each validate → store call → envelope.

pub mod blogs;
pub mod comments;
pub mod landing;
pub mod users;
pub use blogs::*;
pub use comments::*;
pub use landing::landing;
pub use users::*;
