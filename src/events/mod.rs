pub mod click;
pub mod media;
pub mod pointer;

pub use click::wire_link_clicks;
pub use media::wire_media_changes;
pub use pointer::{wire_pointer_tracking, wire_viewport_resize};
