//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top status bar with badge, status and loading spinner
//! - `ErrorNotice`: one-line notice when the last refresh failed
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `DossierView`: scrollable dossier; scroll position lives in `DossierViewState`
//!
//! Components receive external data as props instead of reaching into `App`,
//! so each one can be rendered on its own against a `TestBackend`.

mod dossier_view;
mod error_notice;
mod title_bar;

pub use dossier_view::{DossierView, DossierViewState};
pub use error_notice::ErrorNotice;
pub use title_bar::TitleBar;
