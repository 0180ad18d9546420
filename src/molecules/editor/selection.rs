/// Character-wise selection between an anchor and the moving end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    anchor: (usize, usize),
    head: (usize, usize),
}

impl Selection {
    pub fn new(anchor: (usize, usize), head: (usize, usize)) -> Self {
        Self { anchor, head }
    }

    pub fn anchor(&self) -> (usize, usize) {
        self.anchor
    }

    pub fn head(&self) -> (usize, usize) {
        self.head
    }
}

/// Order two `(row, col)` points so the first comes first in the document.
pub fn normalize_range(
    a: (usize, usize),
    b: (usize, usize),
) -> ((usize, usize), (usize, usize)) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Sort the raw `(row1, col1, row2, col2)` form hosts hand out.
pub fn sorted_points(points: (usize, usize, usize, usize)) -> (usize, usize, usize, usize) {
    let (r1, c1, r2, c2) = points;
    let ((sr, sc), (er, ec)) = normalize_range((r1, c1), (r2, c2));
    (sr, sc, er, ec)
}
