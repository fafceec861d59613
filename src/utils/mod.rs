pub mod error;
pub mod holes;
pub mod logger;
pub mod validation;
