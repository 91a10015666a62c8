// Page interactions: theme, navigation, contact form, resume download.
// Events are dispatched to handlers that return effects for the page to apply.

pub mod contact;
pub mod debounce;
pub mod dispatch;
pub mod nav;
pub mod resume;
pub mod session;
pub mod store;
pub mod theme;

pub use dispatch::{ContactSettings, Dispatcher, Effect, UiEvent};
pub use theme::{Theme, ThemeController};
