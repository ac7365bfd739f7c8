pub mod preview;
pub mod sanitize;
pub mod slug;
pub mod text;
pub mod time;
