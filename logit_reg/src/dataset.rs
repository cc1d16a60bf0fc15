use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, s};

use crate::{LogitErr, Result};

/// An immutable labelled dataset: a design matrix with one sample per row and a
/// binary label per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Array2<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `x` - The design matrix, `n` rows of `d` features.
    /// * `y` - The `n` labels, each of them `0.0` or `1.0`.
    ///
    /// # Returns
    /// A new `Dataset` or an error if the shapes disagree, the dataset is empty or a
    /// label is not binary.
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> Result<Self> {
        validate(x.view(), y.view())?;
        Ok(Self { x, y })
    }

    /// Creates a new `Dataset` from a flat row-major buffer where every row holds
    /// `x_size` features followed by its label.
    ///
    /// # Arguments
    /// * `data` - The raw samples.
    /// * `x_size` - The amount of features per sample.
    pub fn from_flat(data: Vec<f64>, x_size: usize) -> Result<Self> {
        let row_size = x_size + 1;

        if x_size == 0 {
            return Err(LogitErr::InvalidSize);
        }

        if data.len() % row_size != 0 {
            return Err(LogitErr::SizeMismatch {
                what: "flat dataset",
                got: data.len(),
                expected: data.len().next_multiple_of(row_size),
            });
        }

        let rows = data.len() / row_size;
        let full = Array2::from_shape_vec((rows, row_size), data).map_err(|_| {
            LogitErr::SizeMismatch {
                what: "flat dataset",
                got: rows,
                expected: row_size,
            }
        })?;

        let x = full.slice(s![.., ..x_size]).to_owned();
        let y = full.column(x_size).to_owned();
        Self::new(x, y)
    }

    /// Returns the amount of samples.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Always `false`, empty datasets are rejected on construction.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Returns the amount of features per sample.
    pub fn x_size(&self) -> usize {
        self.x.ncols()
    }

    pub fn x(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    /// Splits the samples by label.
    ///
    /// # Returns
    /// A tuple with the positive samples and the negative samples, in their
    /// original order.
    pub fn partition(&self) -> (Array2<f64>, Array2<f64>) {
        let (positive, negative): (Vec<usize>, Vec<usize>) =
            (0..self.len()).partition(|&i| self.y[i] == 1.0);

        (
            self.x.select(Axis(0), &positive),
            self.x.select(Axis(0), &negative),
        )
    }
}

/// Checks that `x` and `y` describe a non-empty set of samples with binary labels.
pub(crate) fn validate(x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(LogitErr::SizeMismatch {
            what: "labels",
            got: y.len(),
            expected: x.nrows(),
        });
    }

    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(LogitErr::EmptyDataset);
    }

    if let Some((index, &value)) = y
        .iter()
        .enumerate()
        .find(|(_, y)| **y != 0.0 && **y != 1.0)
    {
        return Err(LogitErr::InvalidLabel { index, value });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn rejects_mismatched_labels() {
        let err = Dataset::new(array![[0.0, 0.0], [1.0, 1.0]], array![0.0]).unwrap_err();
        assert_eq!(
            err,
            LogitErr::SizeMismatch {
                what: "labels",
                got: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn rejects_non_binary_labels() {
        let err = Dataset::new(array![[0.0], [1.0], [2.0]], array![0.0, 0.5, 1.0]).unwrap_err();
        assert_eq!(
            err,
            LogitErr::InvalidLabel {
                index: 1,
                value: 0.5
            }
        );
    }

    #[test]
    fn rejects_empty() {
        let x = Array2::<f64>::zeros((0, 2));
        let y = Array1::<f64>::zeros(0);
        assert_eq!(Dataset::new(x, y).unwrap_err(), LogitErr::EmptyDataset);
    }

    #[test]
    fn from_flat_splits_features_and_labels() {
        let data = vec![
            0.1, 0.2, 1.0, // 1
            0.3, 0.4, 0.0, // 2
            0.5, 0.6, 1.0, // 3
        ];
        let ds = Dataset::from_flat(data, 2).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.x_size(), 2);
        assert_eq!(ds.x(), array![[0.1, 0.2], [0.3, 0.4], [0.5, 0.6]]);
        assert_eq!(ds.y(), array![1.0, 0.0, 1.0]);
    }

    #[test]
    fn from_flat_rejects_ragged_buffer() {
        let err = Dataset::from_flat(vec![0.1, 0.2, 1.0, 0.3], 2).unwrap_err();
        assert_eq!(
            err,
            LogitErr::SizeMismatch {
                what: "flat dataset",
                got: 4,
                expected: 6
            }
        );
    }

    #[test]
    fn partition_by_label() {
        let ds = Dataset::new(
            array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]],
            array![0.0, 1.0, 0.0, 1.0],
        )
        .unwrap();

        let (positive, negative) = ds.partition();
        assert_eq!(positive, array![[1.0, 1.0], [3.0, 3.0]]);
        assert_eq!(negative, array![[0.0, 0.0], [2.0, 2.0]]);
    }
}
