pub mod dto;
pub mod employee;
pub mod error;
pub use employee::Employee;
pub use error::Error;
