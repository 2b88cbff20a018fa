pub mod config;
pub mod error;
pub mod handlers {
    pub mod site_handlers;
}

pub use handlers::site_handlers::app;
