pub mod dtos;
pub mod openapi;
