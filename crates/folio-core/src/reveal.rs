//! Scroll-reveal bookkeeping. An element is revealed once and stays revealed.

use crate::config::SiteConfig;

#[derive(Debug, Clone)]
pub struct RevealAnimator {
    revealed: Vec<bool>,
    stagger_ms: u32,
    offset_px: u32,
}

impl RevealAnimator {
    pub fn new(count: usize, config: &SiteConfig) -> Self {
        Self {
            revealed: vec![false; count],
            stagger_ms: config.reveal_stagger_ms,
            offset_px: config.reveal_offset_px,
        }
    }

    pub fn delay_ms(&self, index: usize) -> u32 {
        self.stagger_ms.saturating_mul(index as u32)
    }

    /// Inline `transition` for the element at `index`.
    pub fn transition_css(&self, index: usize) -> String {
        format!("all 0.6s ease {}ms", self.delay_ms(index))
    }

    /// Inline `transform` for an element that has not been revealed yet.
    pub fn hidden_transform(&self) -> String {
        format!("translateY({}px)", self.offset_px)
    }

    /// Marks `index` revealed. `false` if it already was, or is out of range.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn remaining(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }
}
