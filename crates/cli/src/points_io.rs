use anyhow::{bail, Context, Result};
use jarvis::Point;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read a cloud from a CSV (or `.parquet`) table with integer columns `x` and `y`.
pub fn read_points(path: &str) -> Result<Vec<Point>> {
    let lf = if path.ends_with(".parquet") {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning {path}"))?
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("reading {path}"))?
    };
    let df = lf
        .select([
            col("x").cast(DataType::Int64),
            col("y").cast(DataType::Int64),
        ])
        .collect()
        .with_context(|| format!("{path}: expected integer columns x and y"))?;
    tracing::info!(rows = df.height(), path, "read_points");

    let xs = df.column("x")?.i64()?;
    let ys = df.column("y")?.i64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        let (Some(x), Some(y)) = (x, y) else {
            bail!("{path}: row {row} is missing a coordinate");
        };
        let x = i32::try_from(x).with_context(|| format!("{path}: row {row}: x out of range"))?;
        let y = i32::try_from(y).with_context(|| format!("{path}: row {row}: y out of range"))?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Write `points` as a CSV table with header `x,y`.
pub fn write_points<P: AsRef<Path>>(path: P, points: &[Point]) -> Result<()> {
    let path = path.as_ref();
    let xs: Vec<i64> = points.iter().map(|p| i64::from(p.x)).collect();
    let ys: Vec<i64> = points.iter().map(|p| i64::from(p.y)).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
