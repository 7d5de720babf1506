mod config_tests;
mod formatting_tests;
