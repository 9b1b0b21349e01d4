// Adapters layer: concrete implementations of domain ports.

pub mod http;

pub use http::HttpMessageSource;
