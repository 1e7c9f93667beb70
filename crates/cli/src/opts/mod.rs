mod display;
mod shell;

pub use display::*;
pub use shell::*;
