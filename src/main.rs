mod config;
mod data;

use std::{env, fmt::Write as _, fs};

use anyhow::Context;
use log::info;
use logit_reg::{Dataset, LogitReg};

use config::RunConfig;

const CONFIG_VAR: &str = "LOGIT_CONFIG";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1).or_else(|| env::var(CONFIG_VAR).ok()) {
        Some(path) => {
            info!("loading config from {path}");
            RunConfig::load(&path)?
        }
        None => RunConfig::default(),
    };

    let dataset = config.dataset()?;
    let mut fitter = LogitReg::with_config(dataset.x_size(), config.fit.clone())?;
    fitter.load_dataset(dataset.clone())?;
    fitter.fit()?;

    let eval = fitter.evaluate(&dataset)?;
    println!("w = {:.4}, b = {:.4}", fitter.weights(), fitter.bias());
    println!("training set: {eval}");

    if let Some(path) = &config.boundary_path {
        write_boundary(&fitter, &dataset, path)?;
        info!("decision boundary written to {path}");
    }

    Ok(())
}

/// Writes the samples and the sampled decision boundary of a two-feature fit as CSV,
/// one `series,x0,x1` row per point.
fn write_boundary(fitter: &LogitReg, dataset: &Dataset, path: &str) -> anyhow::Result<()> {
    let boundary = fitter.boundary()?;
    let (positive, negative) = dataset.partition();
    let (x0, x1) = boundary.points();

    let mut csv = String::from("series,x0,x1\n");
    for (series, samples) in [("positive", &positive), ("negative", &negative)] {
        for row in samples.rows() {
            writeln!(csv, "{series},{},{}", row[0], row[1])?;
        }
    }
    for (x0, x1) in x0.iter().zip(&x1) {
        writeln!(csv, "boundary,{x0},{x1}")?;
    }

    fs::write(path, csv).with_context(|| format!("cannot write boundary to '{path}'"))
}
