mod descriptor;
mod host;
mod normalizer;
mod path;
mod transition;
mod types;

pub use descriptor::*;
pub use host::*;
pub use normalizer::*;
pub use path::*;
pub use transition::*;
pub use types::*;
