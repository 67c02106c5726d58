mod key_errors;
mod swift_errors;
mod temp_url_errors;
mod validation_errors;

pub use key_errors::*;
pub use swift_errors::*;
pub use temp_url_errors::*;
pub use validation_errors::*;
