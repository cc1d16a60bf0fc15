use std::fs;

use anyhow::{Context, bail};
use logit_reg::Dataset;

/// Watermelon dataset 3.0α: density, sugar content and whether the melon is good.
const WATERMELON: [[f64; 3]; 17] = [
    [0.697, 0.460, 1.0],
    [0.774, 0.376, 1.0],
    [0.634, 0.264, 1.0],
    [0.608, 0.318, 1.0],
    [0.556, 0.215, 1.0],
    [0.403, 0.237, 1.0],
    [0.481, 0.149, 1.0],
    [0.437, 0.211, 1.0],
    [0.666, 0.091, 0.0],
    [0.243, 0.267, 0.0],
    [0.245, 0.057, 0.0],
    [0.343, 0.099, 0.0],
    [0.639, 0.161, 0.0],
    [0.657, 0.198, 0.0],
    [0.360, 0.370, 0.0],
    [0.593, 0.042, 0.0],
    [0.719, 0.103, 0.0],
];

/// Returns the embedded watermelon dataset.
pub fn watermelon() -> logit_reg::Result<Dataset> {
    let data = WATERMELON.iter().flatten().copied().collect();
    Dataset::from_flat(data, 2)
}

/// Parses a CSV where every line holds `x_size` features followed by the label.
///
/// # Arguments
/// * `content` - The raw CSV text, blank lines are skipped.
/// * `x_size` - The amount of features per line.
pub fn parse_csv(content: &str, x_size: usize) -> anyhow::Result<Dataset> {
    let row_size = x_size + 1;
    let mut data = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values = line
            .split(',')
            .map(|v| {
                v.trim()
                    .parse::<f64>()
                    .with_context(|| format!("dataset line {i}: cannot parse '{v}' as f64"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if values.len() != row_size {
            bail!(
                "dataset line {i}: expected {row_size} values (x_size={x_size} + label), got {}",
                values.len()
            );
        }

        data.extend(values);
    }

    Ok(Dataset::from_flat(data, x_size)?)
}

/// Reads and parses a CSV dataset from disk.
pub fn load_csv(path: &str, x_size: usize) -> anyhow::Result<Dataset> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read dataset '{path}'"))?;
    parse_csv(&content, x_size)
}
