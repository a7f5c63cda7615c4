pub mod wfh_directory_facade;
