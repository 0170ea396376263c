pub mod generate;
pub mod list;

pub use generate::run_generate_command;
pub use list::run_list_command;
