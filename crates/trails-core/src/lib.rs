pub mod clock;
pub mod config;
pub mod constants;
pub mod contact;
pub mod error;
pub mod gesture;
pub mod palette;
pub mod shared;
pub mod status;
pub mod trail;
pub mod tracker;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use contact::*;
pub use error::*;
pub use gesture::*;
pub use palette::*;
pub use shared::*;
pub use trail::*;
pub use tracker::*;
