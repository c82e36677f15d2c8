pub mod browse;
pub mod list;
pub mod map;
pub mod notes;
pub mod show;
pub mod timeline;
