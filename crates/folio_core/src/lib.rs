//! Folio Core Runtime
//!
//! Foundational primitives shared by the Folio crates:
//!
//! - **Events**: user input and element lifecycle signals routed to widgets
//! - **Geometry**: points, sizes and rectangles used for layout and visibility
//! - **Errors**: the [`FolioError`] type returned by fallible library operations

pub mod error;
pub mod events;
pub mod geometry;

pub use error::{FolioError, Result};
pub use events::{Event, EventData, EventType};
pub use geometry::{Point, Rect, Size};
