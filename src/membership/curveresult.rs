use std::io::Write;
use std::sync::Arc;

use nalgebra::DVector;
use serde::Serialize;

use crate::math::samplegrid::SampleGrid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64
}

/// 一條 membership 曲線。`values[i]` 永遠對應 `grid[i]`。
#[derive(Debug, Clone)]
pub struct CurveResult {
    grid: Arc<SampleGrid>,
    values: DVector<f64>
}

impl CurveResult {
    pub fn new(grid: Arc<SampleGrid>, values: DVector<f64>) -> CurveResult {
        debug_assert_eq!(grid.len(), values.len());
        CurveResult { grid, values }
    }

    pub fn grid(&self) -> &Arc<SampleGrid> {
        &self.grid
    }

    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn y(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.grid.iter().zip(self.values.iter().copied())
    }

    pub fn points(&self) -> Vec<CurvePoint> {
        self.iter().map(|(x, y)| CurvePoint { x, y }).collect()
    }

    /// `x,y` 表頭加每點一列。NaN 寫成 `NaN`。
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "x,y")?;
        for (x, y) in self.iter() {
            writeln!(writer, "{},{}", x, y)?;
        }
        Ok(())
    }

    /// `[{"x": .., "y": ..}, ...]`。serde_json 會把 NaN / Infinity 寫成 `null`。
    pub fn write_json<W: Write>(&self, writer: &mut W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, &self.points())
    }
}
