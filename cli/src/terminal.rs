pub mod clinic;
pub mod colors;
pub mod logging;
pub mod print;
pub mod prompt;
