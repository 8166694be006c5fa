pub mod file_data;
pub mod file_type;
