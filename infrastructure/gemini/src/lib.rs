pub mod client;
pub mod menu_generator;
