//! Framebuffer of character cells for terminal rendering.

/// What a cell shows; the renderer maps tones to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Plain,
    /// Empty board cells and hints
    Dim,
    Border,
    Head,
    Tail,
    Fruit,
    /// Game-over banner
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tone: Tone,
}

impl Cell {
    pub const fn new(ch: char, tone: Tone) -> Self {
        Self { ch, tone }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', Tone::Plain)
    }
}

/// Row-major grid of cells, `(0, 0)` at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells.resize(width as usize * height as usize, Cell::default());
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Writes outside the buffer are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn put_str(&mut self, x: u16, y: u16, text: &str, tone: Tone) {
        for (i, ch) in text.chars().enumerate() {
            let Some(cx) = x.checked_add(i as u16) else {
                break;
            };
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell::new(ch, tone));
        }
    }

    pub fn row(&self, y: u16) -> &[Cell] {
        match self.index(0, y) {
            Some(start) => &self.cells[start..start + self.width as usize],
            None => &[],
        }
    }

    /// The characters of one row, for tests and logs
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_writes_are_dropped() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(3, 0, Cell::new('x', Tone::Plain));
        fb.set(0, 2, Cell::new('x', Tone::Plain));
        assert!(fb.row_text(0).chars().all(|c| c == ' '));
        assert_eq!(fb.get(3, 0), None);
    }

    #[test]
    fn test_put_str_clips_at_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abc", Tone::Dim);
        assert_eq!(fb.row_text(0), "  ab");
        assert_eq!(fb.get(3, 0), Some(Cell::new('b', Tone::Dim)));
    }

    #[test]
    fn test_resize_and_clear() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(0, 0, "zz", Tone::Plain);
        fb.resize(5, 3);
        fb.clear();
        assert_eq!(fb.width(), 5);
        assert_eq!(fb.height(), 3);
        assert_eq!(fb.row_text(2), "     ");
        assert!(fb.row(3).is_empty());
    }
}
