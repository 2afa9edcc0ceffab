pub mod config;
pub mod router;
pub mod handlers {
    pub mod site_handlers;
}

pub use config::{ConfigError, Environment, ServerConfig};
pub use router::build_router;
