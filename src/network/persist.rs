use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;

use crate::error::{Error, Result};

use super::network::Network;

impl Network {
    /// Writes the parameters as newline-delimited text.
    ///
    /// Layout: one header line `"<inputs> <hidden> <outputs>"`, the hidden
    /// bias, the output bias, then every input→hidden weight followed by
    /// every hidden→output weight, one value per line in row-major order.
    /// Values use shortest round-trip formatting, so a reload reproduces
    /// them exactly.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writeln!(
            writer,
            "{} {} {}",
            self.input_size, self.hidden_size, self.output_size
        )?;
        writeln!(writer, "{}", self.hidden_bias)?;
        writeln!(writer, "{}", self.output_bias)?;
        for w in &self.input_weights {
            writeln!(writer, "{w}")?;
        }
        for w in &self.output_weights {
            writeln!(writer, "{w}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Reads parameters written by [`Network::save`].
    ///
    /// The network takes its dimensions from the file header, so the
    /// loaded shape may differ from whatever instance it replaces. A
    /// missing or unopenable file is `Error::Io`; a short file, a bad
    /// header, or a non-numeric value is `Error::Parse` naming the line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Network> {
        let file = File::open(path)?;
        let mut reader = LineReader::new(BufReader::new(file));

        let header = reader.next_line()?;
        let fields: Vec<&str> = header.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(Error::Parse {
                line: 1,
                message: format!("expected 3 dimensions in header, got {}", fields.len()),
            });
        }
        let mut dims = [0usize; 3];
        for (dim, field) in dims.iter_mut().zip(&fields) {
            *dim = field.parse().map_err(|_| Error::Parse {
                line: 1,
                message: format!("'{field}' is not a valid dimension"),
            })?;
            if *dim == 0 {
                return Err(Error::Parse {
                    line: 1,
                    message: "dimensions must be at least 1".into(),
                });
            }
        }
        let [input_size, hidden_size, output_size] = dims;

        let hidden_bias = reader.next_value()?;
        let output_bias = reader.next_value()?;

        let mut input_weights = Vec::with_capacity(hidden_size * input_size);
        for _ in 0..hidden_size * input_size {
            input_weights.push(reader.next_value()?);
        }
        let mut output_weights = Vec::with_capacity(output_size * hidden_size);
        for _ in 0..output_size * hidden_size {
            output_weights.push(reader.next_value()?);
        }

        Ok(Network {
            input_size,
            hidden_size,
            output_size,
            input_weights,
            output_weights,
            hidden_bias,
            output_bias,
            hidden: vec![0.0; hidden_size],
            output: vec![0.0; output_size],
        })
    }

    /// Serializes the network to a pretty-printed JSON snapshot.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(json_error)
    }

    /// Deserializes a network from a JSON snapshot written by
    /// [`Network::save_json`].
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Network> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut network: Network = serde_json::from_reader(reader).map_err(json_error)?;
        // Activation buffers are not part of the snapshot.
        network.hidden = vec![0.0; network.hidden_size];
        network.output = vec![0.0; network.output_size];
        Ok(network)
    }
}

fn json_error(err: serde_json::Error) -> Error {
    if err.is_io() {
        Error::Io(err.into())
    } else {
        Error::Parse {
            line: err.line(),
            message: err.to_string(),
        }
    }
}

/// Line-at-a-time reader that tracks the current line number for errors.
struct LineReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        LineReader {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> Result<String> {
        self.line += 1;
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(Error::Parse {
                line: self.line,
                message: "unexpected end of file".into(),
            }),
        }
    }

    fn next_value(&mut self) -> Result<f64> {
        let line = self.next_line()?;
        let token = line.trim();
        token.parse::<f64>().map_err(|_| Error::Parse {
            line: self.line,
            message: format!("'{token}' is not a valid number"),
        })
    }
}
