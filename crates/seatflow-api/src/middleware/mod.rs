//! HTTP middleware: CORS and request logging.

pub mod cors;
pub mod logging;
