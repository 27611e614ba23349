pub mod questions;
pub mod resolver;
pub mod run;
