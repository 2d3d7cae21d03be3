pub mod config;
pub mod create;
pub mod dir;
pub mod list;
pub mod open;
pub mod path;

pub use config::*;
pub use create::*;
pub use dir::*;
pub use list::*;
pub use open::*;
pub use path::*;
