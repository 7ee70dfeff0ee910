// ============================================================
// Layer 5 — LLM Sentence Classifier
// ============================================================
// Implements the SentenceClassifier trait from Layer 3 on top
// of any ChatClient: build the request for the chunk, send it
// once, parse the `pairs` array out of the reply.
//
// Aligning the pairs with the sentences is left to the caller
// (reconcile::zip_chunk), which knows the filing.

use crate::domain::annotation::Annotation;
use crate::domain::error::ClassifyError;
use crate::domain::traits::SentenceClassifier;
use crate::llm::{prompt, reconcile, ChatClient};

pub struct LlmSentenceClassifier<C: ChatClient> {
    client: C,
    model:  String,
}

impl<C: ChatClient> LlmSentenceClassifier<C> {
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self { client, model: model.into() }
    }
}

impl<C: ChatClient> SentenceClassifier for LlmSentenceClassifier<C> {
    fn classify(&self, sentences: &[String]) -> Result<Vec<Annotation>, ClassifyError> {
        let request = prompt::build_request(&self.model, sentences);
        tracing::debug!("Sending {} sentences to {}", sentences.len(), self.model);

        let content = self.client.complete(&request)?;
        reconcile::parse_pairs(&content)
    }
}
