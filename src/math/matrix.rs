use rand::Rng;

/// Half-width of the interval initial weights are drawn from.
const INIT_RANGE: f64 = 0.5;

/// Dense row-major matrix. In a layer, row `r` holds every weight feeding
/// neuron `r`, so `cols` is the fan-in including the bias slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Independent uniform samples in `[-0.5, 0.5)`, drawn row by row.
    pub fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(-INIT_RANGE..INIT_RANGE);
            }
        }

        res
    }

    /// Builds a matrix from rows. Returns `None` if the rows are ragged.
    /// An empty `data` gives a `0 x 0` matrix.
    pub fn from_data(data: Vec<Vec<f64>>) -> Option<Matrix> {
        let cols = data.first().map_or(0, |row| row.len());
        if data.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r]
    }

    /// Copies column `c` out, i.e. every weight leaving input node `c`.
    pub fn column(&self, c: usize) -> Vec<f64> {
        self.data.iter().map(|row| row[c]).collect()
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.data[r][c]
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

/// Sum of element-wise products, summed left to right.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::uniform(20, 30, &mut rng);
        assert_eq!(m.shape(), (20, 30));
        for row in &m.data {
            for &x in row {
                assert!((-0.5..0.5).contains(&x), "{x} out of range");
            }
        }
    }

    #[test]
    fn test_uniform_is_reproducible_for_a_seed() {
        let a = Matrix::uniform(3, 4, &mut StdRng::seed_from_u64(42));
        let b = Matrix::uniform(3, 4, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_data_rejects_ragged_rows() {
        assert!(Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]).is_none());
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.shape(), (2, 2));
    }

    #[test]
    fn test_column_and_row() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.column(2), vec![3.0, 6.0]);
        assert_eq!(m.get(0, 1), 2.0);
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 0.5]), 4.0 - 10.0 + 1.5);
    }
}
