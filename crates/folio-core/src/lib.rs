//! Folio controller core.
//!
//! DOM-free state machines behind every page behaviour. The browser layer
//! (`folio-wasm`) owns one instance of each controller and renders whatever
//! state it reports; everything here runs and is tested on the host.

pub mod carousel;
pub mod config;
pub mod counter;
pub mod filter;
pub mod form;
pub mod latch;
pub mod modal;
pub mod nav;
pub mod notice;
pub mod prefs;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod typing;

pub use carousel::Carousel;
pub use config::SiteConfig;
pub use filter::GalleryFilter;
pub use form::{ContactForm, ContactFormView, ContactSubmitter, SubmitError, ValidationError};
pub use latch::Latch;
pub use modal::{DetailsOverlay, ProjectLookup};
pub use notice::{Notice, NoticeBoard, NoticeTicket};
pub use prefs::{InMemoryPreferenceStore, PreferenceStore};
pub use theme::ThemeController;
