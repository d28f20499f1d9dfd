//! Unit tests for boardinput.

mod config_tests;
mod transition_table_tests;
