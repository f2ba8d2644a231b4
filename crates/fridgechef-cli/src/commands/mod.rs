pub mod expiring;
pub mod recommend;
pub mod repl;
mod render;
