//! CLI subcommand implementations.

pub mod sub_breeds;
