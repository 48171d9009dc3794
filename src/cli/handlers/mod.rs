//! Reusable command flows

mod list;

pub use list::{confirm_delete, run_get_command, run_list_command};
