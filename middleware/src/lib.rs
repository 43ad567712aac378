//! Middleware for the handler chain.

mod logging;

#[cfg(test)]
mod test;

pub use logging::LoggingMiddleware;
