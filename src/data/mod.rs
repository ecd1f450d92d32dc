pub mod fallback_words;
