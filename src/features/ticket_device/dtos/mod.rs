pub mod device_dto;

pub use device_dto::*;
