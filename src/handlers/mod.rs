//! Command handlers, one per CLI subcommand.

pub mod about;
pub mod info;
pub mod install;
pub mod list;
pub mod setup;

pub use about::handle_about;
pub use info::handle_info;
pub use install::handle_install;
pub use list::{handle_categories, handle_list};
pub use setup::{handle_setup, run_setup};
