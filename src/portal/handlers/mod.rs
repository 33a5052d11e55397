pub mod health;
pub use self::health::health;

pub mod runtime_config;
pub use self::runtime_config::runtime_config;
