//! Message splitting and mention escaping.
//!
//! Discord rejects messages over [`MAX_MESSAGE_LEN`] characters, so long posts are
//! split into several sends. Lengths are counted in characters rather than bytes to
//! match how Discord measures message content.

/// Maximum number of characters Discord accepts in a single message.
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Headroom kept free in debug-channel log messages for code fence framing.
pub const LOG_MESSAGE_MARGIN: usize = 50;

const CONTINUED_PREFIX: &str = "[CONTINUED] ```py\n";
const CODE_FENCE: &str = "```";

/// Splits `text` into chunks of at most `max_len` characters.
///
/// Concatenating the chunks yields `text` exactly. Empty text yields no chunks;
/// text of exactly `max_len` characters yields one.
///
/// # Panics
/// - If `max_len` is zero
pub fn split_message(text: &str, max_len: usize) -> Vec<&str> {
    assert!(max_len > 0, "max_len must be positive");

    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(max_len)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(cut);
        chunks.push(chunk);
        rest = tail;
    }

    chunks
}

/// Splits a log entry for the debug channel, framing continuations as code blocks.
///
/// Log entries usually end in a code block (tracebacks, error dumps), so when an
/// entry is split the fence is closed at the end of each chunk and reopened at the
/// start of the next. A message that fits is returned unchanged.
pub fn split_log_message(text: &str, max_len: usize) -> Vec<String> {
    let chunks = split_message(text, max_len);
    if chunks.len() <= 1 {
        return chunks.into_iter().map(str::to_string).collect();
    }

    let last = chunks.len() - 1;

    chunks
        .into_iter()
        .enumerate()
        .map(|(idx, chunk)| match (idx == 0, idx == last) {
            (true, _) => format!("{}{}", chunk, CODE_FENCE),
            (false, false) => format!("{}{}{}", CONTINUED_PREFIX, chunk, CODE_FENCE),
            (false, true) => format!("{}{}", CONTINUED_PREFIX, chunk),
        })
        .collect()
}

/// Breaks every `@` mention by inserting a zero-width space after it.
pub fn escape_mentions(text: &str) -> String {
    text.replace('@', "@\u{200b}")
}
