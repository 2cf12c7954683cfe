pub mod file_job_log;

pub use file_job_log::FileJobLog;
