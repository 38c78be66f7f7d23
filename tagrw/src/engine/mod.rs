// tagrw/src/engine/mod.rs

pub mod mock;
pub mod traits;

pub use mock::MockEngine;
pub use traits::TagEngine;
