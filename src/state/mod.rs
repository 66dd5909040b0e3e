pub mod flip;
pub mod touch;

pub use flip::FlipTimer;
pub use touch::TouchState;
