pub mod database;
pub mod job_log;
pub mod repositories;
