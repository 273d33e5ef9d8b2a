//! Command implementations for the scoring CLI

pub mod common;
pub mod init_config;
pub mod roster;
pub mod score;
pub mod tiebreak;
pub mod validate;
