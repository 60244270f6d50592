use foundation::color::Color;

/// Marker palette from the site stylesheet, cycled in first-seen order.
pub const FOREST_PALETTE: [Color; 6] = [
    Color::new(0x16, 0x65, 0x34),
    Color::new(0x92, 0x40, 0x0e),
    Color::new(0x03, 0x69, 0xa1),
    Color::new(0x15, 0x80, 0x3d),
    Color::new(0x7c, 0x2d, 0x12),
    Color::new(0x04, 0x78, 0x57),
];

/// Assigns one palette color per forest group for the duration of a single
/// render pass.
///
/// Assignment is purely order-driven: the first distinct forest seen gets
/// `palette[0]`, the second `palette[1]`, and so on, wrapping at the palette
/// length. The same forest can therefore receive a different color on another
/// page load if the feed order changes. That is the documented contract, not
/// an accident; do not "improve" this into a hash of the forest name.
#[derive(Debug, Clone)]
pub struct ForestColorAssigner {
    palette: Vec<Color>,
    seen: Vec<String>,
}

impl ForestColorAssigner {
    /// A palette must hold at least one color.
    pub fn new(palette: Vec<Color>) -> Self {
        assert!(!palette.is_empty(), "palette must hold at least one color");
        Self {
            palette,
            seen: Vec::new(),
        }
    }

    pub fn color_for(&mut self, forest: &str) -> Color {
        if let Some(index) = self.seen.iter().position(|f| f == forest) {
            return self.palette[index % self.palette.len()];
        }
        let index = self.seen.len();
        self.seen.push(forest.to_string());
        self.palette[index % self.palette.len()]
    }

    /// Distinct forests seen so far, in assignment order.
    pub fn seen(&self) -> &[String] {
        &self.seen
    }
}

impl Default for ForestColorAssigner {
    fn default() -> Self {
        Self::new(FOREST_PALETTE.to_vec())
    }
}
