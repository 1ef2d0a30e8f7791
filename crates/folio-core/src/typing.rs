//! Hero typing effect: types a word, pauses, deletes it, moves on.

use crate::config::TypingConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    /// Delay before the next tick.
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TypingEffect {
    words: Vec<Vec<char>>,
    word: usize,
    chars: usize,
    deleting: bool,
    timing: TypingConfig,
}

impl TypingEffect {
    /// `None` when there is nothing to type.
    pub fn new(config: &TypingConfig) -> Option<Self> {
        let words: Vec<Vec<char>> = config
            .words
            .iter()
            .filter(|w| !w.is_empty())
            .map(|w| w.chars().collect())
            .collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            word: 0,
            chars: 0,
            deleting: false,
            timing: config.clone(),
        })
    }

    pub fn tick(&mut self) -> TypingFrame {
        let word = &self.words[self.word];
        let mut delay_ms;
        if self.deleting {
            self.chars -= 1;
            delay_ms = self.timing.delete_ms;
        } else {
            self.chars += 1;
            delay_ms = self.timing.type_ms;
        }
        let text: String = word[..self.chars].iter().collect();

        if !self.deleting && self.chars == word.len() {
            delay_ms = self.timing.word_pause_ms;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.word = (self.word + 1) % self.words.len();
            delay_ms = self.timing.next_word_pause_ms;
        }

        TypingFrame { text, delay_ms }
    }
}
