pub mod wfh_directory_facade_real_impl;
