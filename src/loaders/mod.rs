pub mod environment;

pub use environment::{Environment, load_environment};
