//! Client-side UI state: add form, searchable paginated list, and a text renderer.
//! Holds no I/O of its own; everything goes through a `HeroApi`.

pub mod add_form;
pub mod render;
pub mod search_view;
pub mod shell;

pub use add_form::AddForm;
pub use search_view::{LoadState, SearchView, PAGE_SIZE};
pub use shell::HeroApp;
