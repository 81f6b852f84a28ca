pub mod errors;
pub mod events;
pub mod files;
pub mod junit;

pub type Result<R> = std::result::Result<R, errors::Error>;
