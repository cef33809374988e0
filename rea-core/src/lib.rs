pub mod common;
pub mod domain;
