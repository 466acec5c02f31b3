use crate::{
    client::Client,
    config::Config,
    error::CopilotError,
    types::answer::{AnswerRequest, AnswerResponse},
};

/// API resource for the `/api/copilot` endpoint
pub struct Answer<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Answer<'c, C> {
    /// Creates a new Answer resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Submit a clinical query and return the backend's analysis
    ///
    /// A trimmed-empty query is rejected before any request is issued.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The query is empty or whitespace-only
    /// - The request fails to send
    /// - The API returns an error
    pub async fn create(&self, req: AnswerRequest) -> Result<AnswerResponse, CopilotError> {
        if req.query.trim().is_empty() {
            return Err(CopilotError::Config("query must not be empty".into()));
        }

        self.client.post("/api/copilot", req).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Answer API resource
    #[must_use]
    pub const fn answer(&self) -> Answer<'_, C> {
        Answer::new(self)
    }
}
