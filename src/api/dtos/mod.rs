pub mod common;
pub mod pop_dto;

pub use common::*;
pub use pop_dto::*;
