pub mod health;
pub mod echo;

pub use health::health_handler;
pub use echo::echo_handler;
