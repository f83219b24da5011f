//! Folio Theme System
//!
//! A binary light/dark theme whose preference survives page loads.
//!
//! # Overview
//!
//! - [`ColorScheme`]: the two-valued setting
//! - [`KeyValueStore`]: where the preference is persisted (`"theme" -> "dark" | "light"`)
//! - [`PresentationLayer`]: where the scheme is applied (the `dark` root class)
//! - [`ThemeState`]: resolves the initial scheme and keeps persistence and
//!   presentation as two separate steps
//!
//! # Quick Start
//!
//! ```rust
//! use folio_theme::{ColorScheme, MemoryStore, RootClassList, ThemeState};
//!
//! let mut store = MemoryStore::default();
//! let mut root = RootClassList::default();
//!
//! let mut theme = ThemeState::load(&store, false);
//! assert_eq!(theme.scheme(), ColorScheme::Light);
//!
//! theme.toggle(&mut store, &mut root).unwrap();
//! assert!(root.contains("dark"));
//! assert_eq!(ThemeState::load(&store, false).scheme(), ColorScheme::Dark);
//! ```

pub mod presentation;
pub mod scheme;
pub mod state;
pub mod store;
pub mod tokens;

pub use presentation::{PresentationLayer, RootClassList, DARK_CLASS};
pub use scheme::ColorScheme;
pub use state::{ThemeState, THEME_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use tokens::{Color, ColorToken, ColorTokens};
