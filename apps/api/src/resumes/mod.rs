pub mod handlers;
pub mod registry;
pub mod slug;
pub mod upload;
