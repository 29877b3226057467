pub mod check;
pub mod error;
pub mod hooks;
pub mod label;
pub mod loader;
pub mod model;
pub mod msg;
pub mod util;
pub mod vars;

pub use error::Error;
pub use label::Labels;
pub use model::{Exit, State};
pub use vars::Vars;
