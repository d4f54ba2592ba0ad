pub mod cli;
pub mod conf;
pub mod console;
pub mod logging;
pub mod setup;
pub mod validation;
