use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::Rng;

use crate::error::{Error, Result};

/// Supervised training samples: parallel input and target rows.
///
/// Row count is fixed at construction. [`Dataset::shuffle`] permutes the
/// row order; individual rows are never resized or edited in place.
#[derive(Debug, Clone)]
pub struct Dataset {
    input_size: usize,
    target_size: usize,
    inputs: Vec<Vec<f64>>,
    targets: Vec<Vec<f64>>,
}

impl Dataset {
    /// Loads whitespace-delimited samples from a text file, one per line.
    ///
    /// Each line must hold exactly `input_size + target_size` decimal
    /// numbers; the first `input_size` are the features, the rest the
    /// target (e.g. a one-hot label vector). Blank lines are skipped, and
    /// a final line without a trailing newline still counts.
    ///
    /// An unopenable file is `Error::Io`. A line with the wrong number of
    /// tokens or a non-numeric token is `Error::Parse` naming that line —
    /// nothing is silently zero-filled.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        input_size: usize,
        target_size: usize,
    ) -> Result<Dataset> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let columns = input_size + target_size;
        let mut inputs: Vec<Vec<f64>> = Vec::new();
        let mut targets: Vec<Vec<f64>> = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != columns {
                return Err(Error::Parse {
                    line: idx + 1,
                    message: format!("expected {columns} values, got {}", tokens.len()),
                });
            }

            let mut row = Vec::with_capacity(columns);
            for token in tokens {
                row.push(token.parse::<f64>().map_err(|_| Error::Parse {
                    line: idx + 1,
                    message: format!("'{token}' is not a valid number"),
                })?);
            }

            let target = row.split_off(input_size);
            inputs.push(row);
            targets.push(target);
        }

        if inputs.is_empty() {
            return Err(Error::Parse {
                line: 1,
                message: "file contains no data rows".into(),
            });
        }

        Ok(Dataset {
            input_size,
            target_size,
            inputs,
            targets,
        })
    }

    /// Builds a dataset from in-memory rows.
    ///
    /// All input rows must share one width and all target rows another,
    /// and the two sequences must pair up one to one.
    pub fn from_rows(inputs: Vec<Vec<f64>>, targets: Vec<Vec<f64>>) -> Result<Dataset> {
        if inputs.len() != targets.len() {
            return Err(Error::Shape(format!(
                "inputs/targets length mismatch: {} vs {}",
                inputs.len(),
                targets.len()
            )));
        }
        if inputs.is_empty() {
            return Err(Error::Shape("dataset must hold at least one row".into()));
        }

        let input_size = inputs[0].len();
        let target_size = targets[0].len();
        if input_size == 0 || target_size == 0 {
            return Err(Error::Shape("rows must not be empty".into()));
        }
        for (row, input) in inputs.iter().enumerate() {
            if input.len() != input_size {
                return Err(Error::Shape(format!(
                    "input row {row} has {} values, expected {input_size}",
                    input.len()
                )));
            }
        }
        for (row, target) in targets.iter().enumerate() {
            if target.len() != target_size {
                return Err(Error::Shape(format!(
                    "target row {row} has {} values, expected {target_size}",
                    target.len()
                )));
            }
        }

        Ok(Dataset {
            input_size,
            target_size,
            inputs,
            targets,
        })
    }

    /// Number of samples.
    pub fn rows(&self) -> usize {
        self.inputs.len()
    }

    /// Per-sample feature count.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Per-sample target count.
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// The `row`-th feature vector.
    pub fn input(&self, row: usize) -> &[f64] {
        &self.inputs[row]
    }

    /// The `row`-th target vector.
    pub fn target(&self, row: usize) -> &[f64] {
        &self.targets[row]
    }

    /// Reorders the samples with an unbiased Fisher–Yates pass.
    ///
    /// Input and target rows are swapped in lockstep, so (input, target)
    /// pairs stay intact across any number of shuffles.
    pub fn shuffle(&mut self) {
        let mut rng = rand::thread_rng();
        for a in (1..self.rows()).rev() {
            let b = rng.gen_range(0..=a);
            self.inputs.swap(a, b);
            self.targets.swap(a, b);
        }
    }
}
