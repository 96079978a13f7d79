pub mod config;
pub mod note;
pub mod task;
pub mod user;

pub use config::*;
pub use note::*;
pub use task::*;
pub use user::*;
