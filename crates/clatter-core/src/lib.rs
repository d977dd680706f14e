pub mod clip;
pub mod clock;
pub mod constants;
pub mod mapper;
pub mod volume;

pub use clip::*;
pub use clock::*;
pub use constants::*;
pub use mapper::*;
pub use volume::*;
