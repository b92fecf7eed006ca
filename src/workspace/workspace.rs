use crate::forward::pass::{compute_net, compute_out};
use crate::math::matrix::Matrix;

pub const DEFAULT_SIZE: usize = 5;

/// Server-side ceiling on `size` — the page renders `size²` cells per
/// weight matrix, so the form value must be bounded.
pub const MAX_SIZE: usize = 64;

/// The reactive model: size, auto-fill flag, the user vector, both weight
/// matrices, and the four derived vectors.
///
/// Every mutator ends in `recompute()`, so NET1/OUT1/NET2/OUT2 are always
/// consistent with the current inputs. Changing `size` or `auto_fill`
/// rebuilds W and V (overwriting any user-entered weights) but never touches
/// the vector — after a size change the vector may be stale, in which case
/// the derived chain is empty until it is re-entered.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub size: usize,
    pub auto_fill: bool,
    /// User input, `size × 1`. Starts empty (no rows).
    pub vector: Matrix,
    pub w: Matrix,
    pub v: Matrix,
    pub net1: Vec<f64>,
    pub out1: Vec<f64>,
    pub net2: Vec<f64>,
    pub out2: Vec<f64>,
}

impl Workspace {
    pub fn new() -> Self {
        let mut workspace = Workspace {
            size: DEFAULT_SIZE,
            auto_fill: true,
            vector: Matrix::default(),
            w: Matrix::default(),
            v: Matrix::default(),
            net1: Vec::new(),
            out1: Vec::new(),
            net2: Vec::new(),
            out2: Vec::new(),
        };
        workspace.rebuild_weights();
        workspace.recompute();
        workspace
    }

    /// Cell value for the W/V rebuild: `1/size` rounded to 3 decimals while
    /// auto-fill is on, `0` otherwise.
    pub fn weight_fill(&self) -> f64 {
        if self.auto_fill {
            round3(1.0 / self.size as f64)
        } else {
            0.0
        }
    }

    pub fn set_size(&mut self, size: usize) {
        self.size = size.clamp(1, MAX_SIZE);
        self.rebuild_weights();
        self.recompute();
    }

    pub fn set_auto_fill(&mut self, auto_fill: bool) {
        self.auto_fill = auto_fill;
        self.rebuild_weights();
        self.recompute();
    }

    pub fn set_vector(&mut self, vector: Matrix) {
        self.vector = vector;
        self.recompute();
    }

    pub fn set_w(&mut self, w: Matrix) {
        self.w = w;
        self.recompute();
    }

    pub fn set_v(&mut self, v: Matrix) {
        self.v = v;
        self.recompute();
    }

    fn rebuild_weights(&mut self) {
        let fill = self.weight_fill();
        self.w = Matrix::filled(self.size, self.size, fill);
        self.v = Matrix::filled(self.size, self.size, fill);
    }

    /// Re-derives the whole chain: NET1 from the vector and W, OUT1 from
    /// NET1, NET2 from OUT1 and V (not from the vector), OUT2 from NET2.
    fn recompute(&mut self) {
        let input = self.vector.column(0);
        self.net1 = compute_net(&input, &self.w, self.size);
        self.out1 = compute_out(&self.net1);
        self.net2 = compute_net(&self.out1, &self.v, self.size);
        self.out2 = compute_out(&self.net2);
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Workspace::new()
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
