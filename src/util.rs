mod step;
mod stride;

pub use step::*;
pub use stride::*;
