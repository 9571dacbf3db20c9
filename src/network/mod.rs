pub mod fetch;
pub mod task;

pub use fetch::Fetcher;
pub use task::FetchTask;
