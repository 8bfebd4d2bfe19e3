mod color;
mod scissor;

pub use color::*;
pub use scissor::*;
