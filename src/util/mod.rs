mod shuffle;
mod unique;

pub use shuffle::*;
pub use unique::*;
