pub mod puzzle;
pub mod util;
