pub mod clinic;
pub mod zoo;
