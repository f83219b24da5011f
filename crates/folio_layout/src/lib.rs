//! Folio Layout
//!
//! The interactive side of the page and its markup:
//!
//! - [`carousel`]: auto-scrolling panels that yield to the user and resume
//!   after a quiet period
//! - [`surface`]: the scrollable elements carousels drive
//! - [`visibility`]: scroll-into-view detection for entrance animations
//! - [`navigation`]: smooth anchor scrolling and header state
//! - [`page`]: the HTML renderer
//! - [`shell`]: event routing for one page view

pub mod carousel;
pub mod navigation;
pub mod page;
pub mod shell;
pub mod surface;
pub mod visibility;

pub use carousel::{
    CarouselConfig, CarouselController, CarouselMode, FrameTiming, PanelId, UserSignal,
    WrapPolicy,
};
pub use navigation::{HeaderState, Navigator, SmoothScroll};
pub use page::{render_page, PageOptions, PageRenderer};
pub use shell::PageShell;
pub use surface::{ScrollSurface, VirtualPanel};
pub use visibility::InView;
