//! Named time-series recorder
//!
//! Pulls a fixed set of blocks at each recorded time and keeps one
//! `(t, y)` series per block name. The series are the only thing handed to
//! plotting or any other external sink; CSV and JSON writers are provided
//! here, matching the scope export format (`time [s],<name>,...`).

use std::collections::HashMap;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::block::BlockRef;
use crate::error::{Result, SimError};
use crate::graph;

/// One recorded signal: parallel time and value sequences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub t: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            t: Vec::new(),
            y: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Samples as `(t, y)` pairs, oldest first
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.t.iter().copied().zip(self.y.iter().copied())
    }

    /// Most recent sample
    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.t.last()?, *self.y.last()?))
    }

    fn push(&mut self, t: f64, y: f64) {
        self.t.push(t);
        self.y.push(y);
    }

    fn clear(&mut self) {
        self.t.clear();
        self.y.clear();
    }
}

/// Recorder: samples observed blocks into named series
///
/// # Example
///
/// ```ignore
/// let mut recorder = Recorder::new(vec![lag.clone(), sum.clone()])?;
/// let mut system = System::new();
/// system.add(&mut recorder);
/// system.run(3.0, 0.01)?;
///
/// let lag_series = recorder.series("lag").unwrap();
/// recorder.save_csv("output.csv")?;
/// ```
#[derive(Debug)]
pub struct Recorder {
    blocks: Vec<BlockRef>,
    series: Vec<Series>,
    index: HashMap<String, usize>,
    // Scratch row so a failing block leaves every series the same length
    row: Vec<f64>,
}

impl Recorder {
    /// Create recorder observing `blocks`, in order
    ///
    /// # Errors
    ///
    /// - [`SimError::DuplicateName`] if two blocks share a name
    /// - [`SimError::CyclicGraph`] if any observed block depends on itself
    pub fn new(blocks: Vec<BlockRef>) -> Result<Self> {
        graph::check_acyclic(&blocks)?;

        let mut index = HashMap::with_capacity(blocks.len());
        let mut series = Vec::with_capacity(blocks.len());
        for (i, block) in blocks.iter().enumerate() {
            let name = block.name().to_string();
            if index.insert(name.clone(), i).is_some() {
                return Err(SimError::DuplicateName(name));
            }
            series.push(Series::new(name));
        }

        debug!("recorder observing {:?}", series.iter().map(|s| &s.name).collect::<Vec<_>>());

        Ok(Self {
            row: Vec::with_capacity(blocks.len()),
            blocks,
            series,
            index,
        })
    }

    /// Evaluate every observed block at `t` and append the samples
    pub fn record(&mut self, t: f64) -> Result<()> {
        self.row.clear();
        for block in &self.blocks {
            self.row.push(block.evaluate(t)?);
        }
        for (series, &y) in self.series.iter_mut().zip(&self.row) {
            series.push(t, y);
        }
        Ok(())
    }

    /// Series recorded for the block named `name`
    pub fn series(&self, name: &str) -> Option<&Series> {
        self.index.get(name).map(|&i| &self.series[i])
    }

    /// All series, in observation order
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }

    /// Number of observed series
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Number of samples recorded per series
    pub fn samples(&self) -> usize {
        self.series.first().map_or(0, Series::len)
    }

    /// Drop recorded samples, keeping the observed blocks
    pub fn clear(&mut self) {
        self.series.iter_mut().for_each(Series::clear);
    }

    /// Clear samples and reset every block reachable from the observed set
    pub fn reset(&mut self) -> Result<()> {
        graph::reset_upstream(&self.blocks)?;
        self.clear();
        Ok(())
    }

    /// Consume the recorder, keeping only the series
    pub fn into_series(self) -> Vec<Series> {
        self.series
    }

    /// Write samples as CSV: a time column followed by one column per series
    ///
    /// # CSV Format
    ///
    /// ```csv
    /// time [s],1st-order-delay,s+t
    /// 0,0,0
    /// 0.01,0,0
    /// ```
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header = vec!["time [s]".to_string()];
        header.extend(self.names().map(str::to_string));
        wtr.write_record(&header)?;

        for i in 0..self.samples() {
            let mut record = vec![self.series[0].t[i].to_string()];
            record.extend(self.series.iter().map(|s| s.y[i].to_string()));
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Save samples to a CSV file, adding the `.csv` extension if missing
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = with_csv_extension(path.as_ref());
        let file = std::fs::File::create(&path)?;
        self.write_csv(file)?;
        debug!("saved {} samples to {}", self.samples(), path.display());
        Ok(path)
    }

    /// Serialize all series as a JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.series)?)
    }
}

fn with_csv_extension(path: &Path) -> PathBuf {
    let is_csv = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".csv");
    PathBuf::from(name)
}
