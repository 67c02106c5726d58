mod container_name;
mod object_path;
mod signing_key;

pub use container_name::*;
pub use object_path::*;
pub use signing_key::*;
