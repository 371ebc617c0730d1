//! Folio Content Engine
//!
//! Platform-agnostic core of the bilingual portfolio site. This crate owns the
//! language/direction model, the typed translation catalogues for both
//! languages, and the direction-mirroring helpers the views use in place of
//! hardcoded left/right values. No UI or platform-specific dependencies.

pub mod catalogue;
pub mod lang;
pub mod mirror;

// Re-export commonly used types
pub use catalogue::{
    About, Achievement, Catalogue, CatalogueError, Category, Contact, ContactForm, ContactInfo,
    Experience, Footer, Hero, Nav, NotFound, Project, ProjectFilters, Projects, SkillCategories,
    Skills, Stat, catalogue, parse_catalogue,
};
pub use lang::{Direction, Lang};
pub use mirror::{Side, enter_offset, hover_shift, leading, leading_margin, timeline_side, trailing};
