mod announcement_service;
mod blog_service;
mod library_service;
mod syllabus_service;
mod types;

pub use announcement_service::AnnouncementService;
pub use blog_service::BlogService;
pub use library_service::LibraryService;
pub use syllabus_service::SyllabusService;
pub use types::*;
