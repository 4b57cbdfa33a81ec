pub mod app;
pub mod cli;
pub mod csv_loader;
pub mod extraction;
pub mod logging;
pub mod profile_file;
pub mod report;
pub mod utils;
