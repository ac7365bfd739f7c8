pub mod error_dto;
pub mod job_dto;
pub mod page_dto;
pub mod technology_dto;
