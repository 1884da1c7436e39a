/// A full score matrix with `rows * cols` cells stored row-major in a single
/// allocation.
#[derive(Clone, Debug)]
pub(crate) struct ScoreMatrix {
    data: Vec<i32>,
    cols: usize,
}

impl ScoreMatrix {
    /// Allocates a zeroed matrix.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        ScoreMatrix {
            data: vec![0; rows * cols],
            cols,
        }
    }

    #[inline]
    pub(crate) fn get(&self, r: usize, c: usize) -> i32 {
        self.data[self.cols * r + c]
    }

    #[inline]
    pub(crate) fn set(&mut self, r: usize, c: usize, value: i32) {
        self.data[self.cols * r + c] = value;
    }

    #[inline]
    pub(crate) fn row(&self, r: usize) -> &[i32] {
        &self.data[self.cols * r..self.cols * (r + 1)]
    }

    #[inline]
    pub(crate) fn num_rows(&self) -> usize {
        self.data.len().checked_div(self.cols).unwrap_or(0)
    }

    /// Emits every row of the matrix as a trace-level log record.
    pub(crate) fn log_trace(&self) {
        if log::log_enabled!(log::Level::Trace) {
            for r in 0..self.num_rows() {
                log::trace!("M[{r:02}]: {:?}", self.row(r));
            }
        }
    }
}
