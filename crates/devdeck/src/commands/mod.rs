pub mod completion;
pub mod config;
pub mod qa;
pub mod slides;
pub mod state;
