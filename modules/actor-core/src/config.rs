//! Configuration package.

mod actor_system_config;

pub use actor_system_config::ActorSystemConfig;
