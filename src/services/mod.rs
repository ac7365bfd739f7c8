pub mod job_service;
pub mod technology_service;
