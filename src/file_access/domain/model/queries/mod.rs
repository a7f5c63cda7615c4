pub mod evaluate_file_access_query;
pub mod list_access_events_query;
