/// Check command functionality
pub mod check;
/// Config command functionality
pub mod show_config;
