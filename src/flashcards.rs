/// Browsing position within the evidence-type catalog. Pure snapshot like
/// the trivia session: every transition returns a new value.
///
/// `example_visible` only shows on the back face, but the flag itself is
/// independent of `flipped`: flipping the card back and forth does not hide
/// an example that was shown. Both flags reset when navigation moves to a
/// different card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlashcardState {
    pub current_index: usize,
    pub flipped: bool,
    pub example_visible: bool,
}

impl FlashcardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, catalog_size: usize) -> Self {
        if catalog_size == 0 {
            return *self;
        }
        Self {
            current_index: (self.current_index + 1) % catalog_size,
            flipped: false,
            example_visible: false,
        }
    }

    pub fn previous(&self, catalog_size: usize) -> Self {
        if catalog_size == 0 {
            return *self;
        }
        Self {
            current_index: (self.current_index + catalog_size - 1) % catalog_size,
            flipped: false,
            example_visible: false,
        }
    }

    pub fn flip(&self) -> Self {
        Self {
            flipped: !self.flipped,
            ..*self
        }
    }

    pub fn toggle_example(&self) -> Self {
        Self {
            example_visible: !self.example_visible,
            ..*self
        }
    }
}
