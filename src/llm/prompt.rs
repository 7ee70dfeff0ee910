// ============================================================
// Layer 5 — Prompt and Response Schema
// ============================================================
// Builds the request for one chunk of sentences:
//
//   system: fixed instructions naming the four aspects
//   user:   the chunk, numbered from 1
//             1. Revenue grew substantially.
//             2. We expect continued growth next year.
//
// The reply is constrained by a strict JSON schema: an object
// whose `pairs` array holds one label object per sentence.
// Temperature is pinned to 0.

use serde_json::json;

use crate::domain::annotation::Sentiment;
use crate::llm::{ChatMessage, ChatRequest};

/// Default chat-completion model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Name given to the response schema.
pub const SCHEMA_NAME: &str = "key_value_pairs_list";

pub const SYSTEM_PROMPT: &str = "\
You are a helpful assistant. You will be provided with multiple sentences,
and your goal will be to output an analysis for each sentence based on these four aspects:
1. Forward-looking: Is the sentence about future events or expectations? (Yes/No)
2. Quantitative: Does it include numbers, percentages, or quantities? (Yes/No)
3. About earnings: Does it refer to financial performance or earnings? (Yes/No)
4. Sentiment: How would you classify the tone?
   - Positive (optimistic)
   - Neutral (factual)
   - Negative (pessimistic)
   - Uncertain (ambiguous)
Return exactly one analysis per sentence, in the order given.
Make sure not to return the sentence.
";

/// Number the sentences from 1, one per line.
pub fn numbered_sentences(sentences: &[String]) -> String {
    sentences
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The strict `response_format` value for the chat-completion API.
pub fn response_format() -> serde_json::Value {
    let yes_no = |description: &str| {
        json!({
            "type": "string",
            "enum": ["yes", "no"],
            "description": description,
        })
    };
    let sentiments: Vec<&str> = Sentiment::ALL.iter().map(|s| s.as_str()).collect();

    json!({
        "type": "json_schema",
        "json_schema": {
            "name": SCHEMA_NAME,
            "strict": true,
            "schema": {
                "type": "object",
                "properties": {
                    "pairs": {
                        "type": "array",
                        "description": "One analysis per input sentence, in input order.",
                        "items": {
                            "type": "object",
                            "properties": {
                                "forward_looking": yes_no("Indicates if the information is forward looking."),
                                "quantitative":    yes_no("Indicates if the information is quantitative."),
                                "about_earnings":  yes_no("Indicates if the information is about earnings."),
                                "sentiment": {
                                    "type": "string",
                                    "enum": sentiments,
                                    "description": "The sentiment associated with the information.",
                                },
                            },
                            "required": ["forward_looking", "quantitative", "about_earnings", "sentiment"],
                            "additionalProperties": false,
                        },
                    },
                },
                "required": ["pairs"],
                "additionalProperties": false,
            },
        },
    })
}

/// Build the request for one chunk.
pub fn build_request(model: &str, sentences: &[String]) -> ChatRequest {
    ChatRequest {
        model:           model.to_string(),
        messages:        vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(numbered_sentences(sentences)),
        ],
        temperature:     0.0,
        response_format: response_format(),
    }
}
