pub mod app;
pub mod controller;
pub mod events;
pub mod haptics;
pub mod input;
pub mod layout;
pub mod loadable;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod scrubber;
pub mod section_list;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
