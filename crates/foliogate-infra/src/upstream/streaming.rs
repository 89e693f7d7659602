//! SSE re-framer: upstream byte stream to plain text fragments.
//!
//! The upstream answers with server-sent-event framing, chunked at
//! arbitrary byte boundaries. This module reassembles the chunks into
//! complete `data:` lines, extracts the content delta from each event,
//! and forwards only the delta text. The event framing itself is never
//! re-encoded for the downstream caller.
//!
//! Two pieces of rolling state live for the duration of one response
//! stream: the UTF-8 decoder's partial-sequence carry and the line
//! buffer's unterminated tail. Fragments are emitted strictly in arrival
//! order; the only buffering is what line and character reassembly
//! require.

use bytes::Bytes;
use futures_util::{Stream, StreamExt};

use foliogate_types::error::RelayError;

use foliogate_core::chat::DeltaStream;

use super::wire::StreamChunk;

const DATA_PREFIX: &str = "data: ";
const DONE_SENTINEL: &str = "[DONE]";

/// Incremental UTF-8 decoder.
///
/// A multi-byte sequence split across chunk boundaries must not be
/// decoded per-chunk: the incomplete tail is held back and prepended to
/// the next chunk. Hard-invalid bytes (not merely incomplete) are
/// replacement-decoded, matching what a lossy text decoder would do.
#[derive(Default)]
struct Utf8Carry {
    pending: Vec<u8>,
}

impl Utf8Carry {
    fn decode(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);

        let valid_len = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            // An incomplete trailing sequence: decode up to it, carry the rest.
            Err(err) if err.error_len().is_none() => err.valid_up_to(),
            // Invalid bytes mid-buffer: the input is not UTF-8 at all,
            // lossy-decode everything buffered and start over.
            Err(_) => {
                let decoded = String::from_utf8_lossy(&self.pending).into_owned();
                self.pending.clear();
                return decoded;
            }
        };

        let tail = self.pending.split_off(valid_len);
        let head = std::mem::replace(&mut self.pending, tail);
        String::from_utf8_lossy(&head).into_owned()
    }
}

/// Rolling line buffer.
///
/// Appends decoded text, returns all complete lines, and retains the
/// final unterminated segment for the next chunk.
#[derive(Default)]
struct LineBuffer {
    buffer: String,
}

impl LineBuffer {
    fn push(&mut self, text: &str) -> Vec<String> {
        self.buffer.push_str(text);
        let mut lines: Vec<String> = self.buffer.split('\n').map(str::to_owned).collect();
        self.buffer = lines.pop().unwrap_or_default();
        lines
    }
}

/// What one complete SSE line contributes to the output.
///
/// - no `data: ` prefix (comments, event types, keep-alives): nothing
/// - the `[DONE]` sentinel: nothing, an end-of-stream marker is not content
/// - a parseable chat-completion chunk: its delta text, when non-empty
/// - anything else: the raw trimmed payload, verbatim. The upstream
///   format is not trusted enough to drop lines silently
fn fragment_for_line(line: &str) -> Option<String> {
    let data = line.strip_prefix(DATA_PREFIX)?.trim();
    if data == DONE_SENTINEL {
        return None;
    }

    match serde_json::from_str::<StreamChunk>(data) {
        Ok(chunk) => {
            let token = chunk
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.delta.content)
                .unwrap_or_default();
            (!token.is_empty()).then_some(token)
        }
        Err(_) => Some(data.to_string()),
    }
}

/// Re-frame an upstream byte stream into plain text fragments.
///
/// A read error surfaces as one final `Err` item; nothing follows it.
/// Unterminated trailing data at stream end is discarded, exactly as it
/// is when the stream arrives in a single chunk.
pub fn reframe<S, E>(upstream: S) -> DeltaStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut decoder = Utf8Carry::default();
        let mut lines = LineBuffer::default();
        let mut upstream = std::pin::pin!(upstream);

        while let Some(chunk) = upstream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(err) => {
                    yield Err(RelayError::Stream(err.to_string()));
                    return;
                }
            };

            let text = decoder.decode(&chunk);
            for line in lines.push(&text) {
                if let Some(fragment) = fragment_for_line(&line) {
                    yield Ok(fragment);
                }
            }
        }
    })
}
