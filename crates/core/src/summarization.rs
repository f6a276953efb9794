//! Note summarization inputs and the short-text bypass.

/// Summary length bounds passed to the summarization model, in tokens.
pub const SUMMARY_MAX_LENGTH: u32 = 130;
pub const SUMMARY_MIN_LENGTH: u32 = 30;

/// Join a skill's description and notes into the text to summarize.
pub fn notes_text(description: &str, notes: &str) -> String {
    format!("{description}\n{notes}")
}

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Texts shorter than `min_words` are returned as-is instead of being sent
/// to the model.
pub fn needs_summarization(text: &str, min_words: u32) -> bool {
    word_count(text) >= min_words as usize
}
