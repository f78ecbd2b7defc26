mod prelude;
pub mod canonical;
pub mod data;
pub mod extras;
pub mod merge;
pub mod rng;
pub mod rotation;
pub mod safety;
pub mod signature;

pub use prelude::*;
pub use canonical::*;
pub use data::*;
pub use extras::*;
pub use merge::*;
pub use rng::*;
pub use rotation::*;
pub use safety::*;
pub use signature::*;
