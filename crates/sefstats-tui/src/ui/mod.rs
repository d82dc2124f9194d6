pub mod app;
pub mod components;
pub mod format;
pub mod i18n;
pub mod layout;
pub mod terminal;
pub mod theme;
pub mod views;

pub use app::{App, FetchState, InputMode, RefetchRequest, UID_DEBOUNCE};
pub use i18n::{tr, InterfaceLang};
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
