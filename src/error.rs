use reqwest::StatusCode;

/// Failures inside the scrape pipeline. These never leave the top-level
/// fetch operations; they are logged and turned into `None` there.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: StatusCode },
    #[error("invalid selector: {0}")]
    Selector(String),
}
