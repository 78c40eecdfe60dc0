//! Scripted language model - returns queued canned replies.

use std::collections::VecDeque;
use std::sync::Mutex;

use vendor_core::{async_trait, CompletionRequest, LanguageModel, VendorError};

/// A [`LanguageModel`] that pops canned replies off a queue and records
/// every request it sees.
///
/// When the queue runs dry it returns `VendorError::InvalidResponse`, so a
/// test that makes more completions than it scripted fails loudly.
#[derive(Debug, Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedModel {
    /// Create a ScriptedModel with no replies queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ScriptedModel preloaded with replies, returned in order.
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue one more reply.
    pub fn push_reply(&self, reply: impl Into<String>) {
        self.replies.lock().unwrap().push_back(reply.into());
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// How many completions have been made.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn complete(&self, request: CompletionRequest) -> Result<String, VendorError> {
        self.requests.lock().unwrap().push(request);

        self.replies.lock().unwrap().pop_front().ok_or_else(|| {
            VendorError::InvalidResponse("ScriptedModel reply queue is empty".to_string())
        })
    }

    fn name(&self) -> &str {
        "ScriptedModel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_in_order() {
        let model = ScriptedModel::with_replies(vec!["one".to_string(), "two".to_string()]);

        let first = model
            .complete(CompletionRequest::new("s", "a"))
            .await
            .unwrap();
        let second = model
            .complete(CompletionRequest::new("s", "b"))
            .await
            .unwrap();

        assert_eq!(first, "one");
        assert_eq!(second, "two");
        assert_eq!(model.call_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_queue_errors() {
        let model = ScriptedModel::new();
        let result = model.complete(CompletionRequest::new("s", "u")).await;
        assert!(matches!(result, Err(VendorError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_records_requests() {
        let model = ScriptedModel::with_replies(vec!["ok".to_string()]);
        model
            .complete(CompletionRequest::new("sys", "analyze this"))
            .await
            .unwrap();

        let requests = model.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].user_text(), Some("analyze this"));
    }
}
