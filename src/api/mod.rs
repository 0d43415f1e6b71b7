pub mod fetch;

pub use fetch::{HtmlFetcher, ReqwestFetcher};
