//! Registration, credential exchange, and session verification.

pub mod extractor;
pub mod handlers;
pub mod password;
pub mod session;

pub use extractor::AuthUser;
pub use session::SessionIssuer;
