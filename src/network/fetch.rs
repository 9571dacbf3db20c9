//! Single blocking GET of the flashcard payload.

use reqwest::blocking::Client;

use crate::config::EndpointConfig;
use crate::error::Result;

pub struct Fetcher {
    client: Client,
    url: String,
}

impl Fetcher {
    pub fn new(endpoint: &EndpointConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: endpoint.url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Reads the whole response body as text.
    ///
    /// Blocks the calling thread until the server answers; never call this
    /// from the UI thread. Any transport failure or non-2xx status is an
    /// `Error::Network`.
    pub fn fetch(&self) -> Result<String> {
        let response = self.client.get(&self.url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}
