pub mod account;
pub mod catalog;
pub mod settings;
pub mod temp_url;

pub use account::*;
pub use catalog::*;
pub use settings::*;
pub use temp_url::*;
