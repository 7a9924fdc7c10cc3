pub mod common;
pub mod estimates;
pub mod health;

pub use estimates::post_estimate;
pub use health::health;
