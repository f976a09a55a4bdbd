//! Carousel paging: slide counts, autoplay steps and loop-back.
//!
//! The carousel is not infinite. Autoplay advances one page at a time; once
//! the last page is reached the host is asked to jump back to the first slide
//! after one more autoplay interval.

use super::card::AssetCard;
use super::context::DisplayContext;
use super::Asset;
use std::time::Duration;

pub const MAX_SLIDES_TO_SHOW: usize = 4;
pub const SLIDES_TO_SCROLL: usize = 4;
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(2300);

/// Deferred action the host carousel should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    GoTo { index: usize, after: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current_index: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Every card when there are three or fewer, otherwise four.
    pub fn slides_to_show(&self) -> usize {
        if self.len <= 3 {
            self.len
        } else {
            MAX_SLIDES_TO_SHOW
        }
    }

    /// Index of the first slide on the last full page.
    pub fn last_start(&self) -> usize {
        self.len.saturating_sub(self.slides_to_show())
    }

    /// Record a completed slide change and return the loop-back command when
    /// the carousel has reached its last page.
    pub fn after_change(&mut self, index: usize) -> Option<CarouselCommand> {
        self.current_index = index.min(self.last_start());
        if self.len.checked_sub(MAX_SLIDES_TO_SHOW) == Some(index) {
            tracing::debug!("Carousel reached last page at {}, scheduling loop-back", index);
            Some(CarouselCommand::GoTo {
                index: 0,
                after: AUTOPLAY_INTERVAL,
            })
        } else {
            None
        }
    }

    /// Jump to `index`, clamped to the last page.
    pub fn go_to(&mut self, index: usize) {
        self.current_index = index.min(self.last_start());
    }

    /// Where the next autoplay tick lands, or `None` when already on the last page.
    pub fn next_autoplay_index(&self) -> Option<usize> {
        if self.current_index >= self.last_start() {
            return None;
        }
        Some((self.current_index + SLIDES_TO_SCROLL).min(self.last_start()))
    }
}

/// Cards plus paging state for the watch-list banner.
#[derive(Debug, Clone)]
pub struct AssetCarousel {
    cards: Vec<AssetCard>,
    state: CarouselState,
}

impl AssetCarousel {
    pub fn new(assets: &[Asset], ctx: &DisplayContext) -> Self {
        let cards: Vec<AssetCard> = assets.iter().map(|a| AssetCard::new(a, ctx)).collect();
        let state = CarouselState::new(cards.len());
        Self { cards, state }
    }

    pub fn cards(&self) -> &[AssetCard] {
        &self.cards
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CarouselState {
        &mut self.state
    }

    /// Cards currently on screen.
    pub fn visible(&self) -> &[AssetCard] {
        let start = self.state.current_index().min(self.cards.len());
        let end = (start + self.state.slides_to_show()).min(self.cards.len());
        &self.cards[start..end]
    }

    /// Handle a click on the card at `position`. Returns `false` if out of range.
    pub fn click(&self, position: usize, ctx: &DisplayContext) -> bool {
        match self.cards.get(position) {
            Some(card) => {
                ctx.select(&card.id);
                true
            }
            None => false,
        }
    }
}
