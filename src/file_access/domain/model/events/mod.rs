pub mod file_access_audited_event;
