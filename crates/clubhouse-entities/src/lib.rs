pub mod types;
pub mod users;
pub mod sessions;

// Content entities
pub mod blogs;
pub mod lab_manuals;
pub mod question_papers;
pub mod textbooks;
pub mod syllabus_entries;
pub mod announcements;

// Analytics entities
pub mod page_view_events;
pub mod archived_page_view_counts;
