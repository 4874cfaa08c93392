pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;

#[cfg(test)]
mod tests;
