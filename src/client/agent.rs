//! `/api/agent` endpoints
//!
//! The chat endpoint answers with an event stream. Each `data: ` line
//! carries the next fragment of the assistant reply:
//!
//! ```text
//! data: Le titre BIAT
//!
//! data:  a progressé de 2%
//! ```

use super::types::ChatRequest;
use super::{segment, ApiClient, RequestOptions};
use crate::error::{ApiError, Result};
use futures_util::stream::{self, BoxStream, Stream, StreamExt};
use serde_json::Value;
use std::collections::VecDeque;
use tracing::debug;

const DATA_PREFIX: &[u8] = b"data: ";

pub struct AgentApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AgentApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /api/agent/chat`, yielding reply fragments as they arrive
    pub async fn chat_stream(
        &self,
        request: &ChatRequest,
    ) -> Result<BoxStream<'static, Result<String>>> {
        let body = serde_json::to_value(request)?;
        let response = self
            .client
            .dispatch("/api/agent/chat", RequestOptions::post(Some(body)))
            .await?;

        Ok(text_deltas(Box::pin(response.bytes_stream())).boxed())
    }

    /// `POST /api/agent/chat`, collected into the full reply
    pub async fn chat(&self, request: &ChatRequest) -> Result<String> {
        let mut deltas = self.chat_stream(request).await?;
        let mut reply = String::new();
        while let Some(delta) = deltas.next().await {
            reply.push_str(&delta?);
        }
        debug!("Agent reply complete ({} chars)", reply.chars().count());
        Ok(reply)
    }

    /// `GET /api/agent/advice/{code}`
    pub async fn advice(&self, stock_code: &str) -> Result<Value> {
        self.client
            .get(&format!("/api/agent/advice/{}", segment(stock_code)))
            .await
    }
}

/// Splits a byte stream into lines and extracts `data: ` payloads
///
/// Lines may straddle chunk boundaries, including in the middle of a UTF-8
/// sequence; bytes are buffered until the newline arrives.
#[derive(Debug, Default)]
pub struct EventLineDecoder {
    buffer: Vec<u8>,
}

impl EventLineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk; returns the payloads of every line it completed
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut payloads = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(text) = data_payload(&line[..line.len() - 1]) {
                payloads.push(text);
            }
        }
        payloads
    }

    /// Flush a final line that had no trailing newline
    pub fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.buffer);
        if rest.is_empty() {
            return None;
        }
        data_payload(&rest)
    }
}

fn data_payload(line: &[u8]) -> Option<String> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    line.strip_prefix(DATA_PREFIX)
        .map(|payload| String::from_utf8_lossy(payload).into_owned())
}

struct DeltaState<S> {
    body: S,
    decoder: EventLineDecoder,
    pending: VecDeque<String>,
    finished: bool,
}

fn text_deltas<S, B>(body: S) -> impl Stream<Item = Result<String>>
where
    S: Stream<Item = reqwest::Result<B>> + Unpin,
    B: AsRef<[u8]>,
{
    let state = DeltaState {
        body,
        decoder: EventLineDecoder::new(),
        pending: VecDeque::new(),
        finished: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(text) = state.pending.pop_front() {
                return Some((Ok(text), state));
            }
            if state.finished {
                return None;
            }
            match state.body.next().await {
                Some(Ok(chunk)) => {
                    let payloads = state.decoder.push(chunk.as_ref());
                    state.pending.extend(payloads);
                }
                Some(Err(e)) => {
                    state.finished = true;
                    return Some((Err(ApiError::from(e)), state));
                }
                None => {
                    state.finished = true;
                    state.pending.extend(state.decoder.finish());
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::types::ChatMessage;
    use crate::config::ClientConfig;
    use crate::test_support::spawn_server;
    use axum::{body::Body, http::StatusCode, routing::post, Json, Router};
    use serde_json::json;

    #[test]
    fn test_decoder_handles_split_lines() {
        let mut decoder = EventLineDecoder::new();
        assert!(decoder.push(b"data: Bon").is_empty());
        assert_eq!(decoder.push(b"jour\n\ndata: ,"), vec!["Bonjour".to_string()]);
        assert_eq!(decoder.push(b" monde\r\n"), vec![", monde".to_string()]);
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn test_decoder_ignores_other_lines() {
        let mut decoder = EventLineDecoder::new();
        let payloads = decoder.push(b"event: message\n: keep-alive\ndata:no-space\ndata: ok\n");
        assert_eq!(payloads, vec!["ok".to_string()]);
    }

    #[test]
    fn test_decoder_reassembles_split_utf8() {
        let bytes = "data: Société\n".as_bytes();
        // split inside the two-byte 'é'
        let cut = bytes.iter().position(|b| *b == 0xC3).unwrap() + 1;
        let mut decoder = EventLineDecoder::new();
        assert!(decoder.push(&bytes[..cut]).is_empty());
        assert_eq!(decoder.push(&bytes[cut..]), vec!["Société".to_string()]);
    }

    #[test]
    fn test_decoder_flushes_unterminated_line() {
        let mut decoder = EventLineDecoder::new();
        assert!(decoder.push(b"data: fin").is_empty());
        assert_eq!(decoder.finish(), Some("fin".to_string()));
    }

    #[tokio::test]
    async fn test_chat_collects_stream() {
        let router = Router::new().route(
            "/api/agent/chat",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["message"], "Que penses-tu de BIAT ?");
                assert_eq!(body["stock_code"], "BIAT");
                let chunks: Vec<std::result::Result<String, std::io::Error>> = vec![
                    Ok("data: BIAT est\n\nda".to_string()),
                    Ok("ta:  en hausse\n\n".to_string()),
                    Ok("data: .\n\n".to_string()),
                ];
                Body::from_stream(futures_util::stream::iter(chunks))
            }),
        );
        let base = spawn_server(router).await;
        let client = ApiClient::new(&ClientConfig::new(base)).unwrap();

        let request = ChatRequest::new("Que penses-tu de BIAT ?")
            .for_stock("BIAT")
            .with_history(vec![ChatMessage::assistant("Bonjour !")]);
        let reply = client.agent().chat(&request).await.unwrap();
        assert_eq!(reply, "BIAT est en hausse.");
    }

    #[tokio::test]
    async fn test_chat_error_status() {
        let router = Router::new().route(
            "/api/agent/chat",
            post(|| async {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({"detail": "message too short"})))
            }),
        );
        let base = spawn_server(router).await;
        let client = ApiClient::new(&ClientConfig::new(base)).unwrap();

        let err = client.agent().chat(&ChatRequest::new("")).await.unwrap_err();
        assert_eq!(err.to_string(), "message too short");
    }
}
