//! Content management for the Clubhouse platform
//!
//! Public read endpoints plus admin-gated CRUD for the six content types:
//! blogs, lab manuals, question papers, textbooks, syllabus entries and
//! announcements.

mod plugin;

pub mod handlers;
pub mod services;

pub use plugin::ContentPlugin;
pub use services::{
    AnnouncementService, BlogService, ContentError, LibraryService, SyllabusService,
};
