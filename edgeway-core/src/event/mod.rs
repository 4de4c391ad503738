mod envelope;
mod error;
mod request;
mod response;
#[cfg(test)]
mod tests;

pub use envelope::*;
pub use error::*;
pub use request::*;
pub use response::*;
