//! Complement and arc tables on disk. `.parquet` paths use Parquet, anything
//! else CSV with a header row.

use ahull::api::{ArcRecord, Complement, ComplementRow};
use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

const COMPLEMENT_COLUMNS: [&str; 3] = ["c1", "c2", "r"];

fn is_parquet(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "parquet")
}

/// Read the `c1, c2, r` columns; integer columns are widened to f64.
/// Every row is decoded once so a bad code fails here, with the path.
pub fn read_complement(path: &Path) -> Result<Complement> {
    let lf = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?
    };
    let df = lf
        .select(COMPLEMENT_COLUMNS.map(|c| col(c).cast(DataType::Float64)))
        .collect()
        .with_context(|| format!("reading complement columns from {}", path.display()))?;
    let c1 = float_column(&df, "c1")?;
    let c2 = float_column(&df, "c2")?;
    let r = float_column(&df, "r")?;
    let complement = Complement::from_columns(&c1, &c2, &r)?;
    for (i, row) in complement.rows().iter().enumerate() {
        ComplementRow::decode(i, *row)
            .with_context(|| format!("invalid complement in {}", path.display()))?;
    }
    tracing::debug!(rows = df.height(), path = %path.display(), "complement read");
    Ok(complement)
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let ca = df.column(name)?.f64()?;
    ca.into_iter()
        .enumerate()
        .map(|(i, v)| v.with_context(|| format!("missing {name} in row {i}")))
        .collect()
}

pub fn write_complement(path: &Path, complement: &Complement) -> Result<()> {
    let rows = complement.rows();
    let column = |k: usize| rows.iter().map(|row| row[k]).collect::<Vec<f64>>();
    let mut df = DataFrame::new(
        COMPLEMENT_COLUMNS
            .iter()
            .enumerate()
            .map(|(k, name)| Series::new((*name).into(), column(k)))
            .collect(),
    )?;
    write_frame(path, &mut df)
}

/// One row per boundary arc: `c1, c2, r, vx, vy, theta, end1, end2`.
pub fn write_arcs(path: &Path, arcs: &[ArcRecord]) -> Result<()> {
    let f = |get: fn(&ArcRecord) -> f64| arcs.iter().map(get).collect::<Vec<f64>>();
    let g = |get: fn(&ArcRecord) -> Option<f64>| arcs.iter().map(get).collect::<Vec<_>>();
    let mut df = DataFrame::new(vec![
        Series::new("c1".into(), f(|a| a.c1)),
        Series::new("c2".into(), f(|a| a.c2)),
        Series::new("r".into(), f(|a| a.r)),
        Series::new("vx".into(), f(|a| a.vx)),
        Series::new("vy".into(), f(|a| a.vy)),
        Series::new("theta".into(), f(|a| a.theta)),
        Series::new("end1".into(), g(|a| a.end1)),
        Series::new("end2".into(), g(|a| a.end2)),
    ])?;
    write_frame(path, &mut df)
}

fn write_frame(path: &Path, df: &mut DataFrame) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(&mut file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
    }
    tracing::debug!(rows = df.height(), path = %path.display(), "table written");
    Ok(())
}
