pub mod document;
pub mod element;
pub mod event;
pub mod text_input;

pub use document::Document;
pub use element::{find_element, find_element_mut, Element, InputType, Tag};
pub use event::Event;
pub use text_input::{char_len, clamp_cursor};
