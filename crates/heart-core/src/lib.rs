pub mod clock;
pub mod config;
pub mod constants;
pub mod easing;
pub mod effect;
pub mod error;
pub mod layer;
pub mod motion;
pub mod spawn;

pub use clock::*;
pub use config::{
    resolve, resolve_lenient, resolve_or_default, HeartConfig, HeartCount, MoveRange, Resolution,
    SizeRange,
};
pub use constants::*;
pub use easing::Easing;
pub use effect::{HeartEffect, HeartId};
pub use error::*;
pub use layer::*;
pub use motion::{HeartFrame, HeartMotion, Step};
pub use spawn::{heart_count, HeartVisual};
