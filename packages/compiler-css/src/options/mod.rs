//! Component option objects.
//!
//! Each option type is plain configuration: every field is an optional CSS
//! value, and unset fields emit nothing.

mod button;
mod card;
mod date_picker;
mod input;
mod nav_bar;

pub use button::ButtonOptions;
pub use card::CardOptions;
pub use date_picker::DatePickerOptions;
pub use input::InputOptions;
pub use nav_bar::NavBarOptions;
