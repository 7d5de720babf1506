pub mod output;
pub mod utils;

pub use output::{print_json, print_members, print_repos, print_team};
pub use utils::{clean_description, str_field, truncate};
