pub mod health_handlers;
pub mod temp_url_handlers;

pub use health_handlers::*;
pub use temp_url_handlers::*;
