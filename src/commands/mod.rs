pub mod events;
pub mod feed;
