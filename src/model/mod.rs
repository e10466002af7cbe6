pub mod season;
pub mod teams;
pub mod types;
pub mod utils;

pub use season::*;
pub use teams::*;
pub use types::*;
pub use utils::*;
