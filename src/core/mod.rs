pub mod errors;
pub mod filter;
pub mod http;
pub mod models;
pub mod tasks;

pub use errors::JobDeckError;
pub use filter::{
    matches,
    FilterSet,
};
pub use models::Job;
