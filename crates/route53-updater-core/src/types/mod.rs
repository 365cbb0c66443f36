mod change;
mod info;

pub use change::*;
pub use info::*;
