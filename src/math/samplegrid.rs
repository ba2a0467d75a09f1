use nalgebra::DVector;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_GRID_START: f64 = 0.0;
pub const DEFAULT_GRID_END: f64 = 10.0;
pub const DEFAULT_GRID_POINTS: usize = 1000;
pub const MAX_GRID_POINTS: usize = 10_000_000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleGridError {
    #[error("grid of {points} points exceeds the limit of {max} points")]
    TooManyPoints {
        points: usize,
        max: usize
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SampleGrid
// ─────────────────────────────────────────────────────────────────────────────

/// 等距取樣網格，閉區間 [start, end]，兩端點皆包含。
///
/// 建構方式與 `linspace` 相同：
///
///   x_i = start + i * step,  step = (end - start) / (n - 1)
///
/// 最後一點直接設為 `end`，避免累積誤差讓右端點偏離。
/// 建構後不可變，以 `Arc<SampleGrid>` 在各 membership function 之間共享。
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    start: f64,
    end: f64,
    values: DVector<f64>,
}

impl SampleGrid {
    pub fn new(start: f64, end: f64, points: usize) -> SampleGrid {
        let values = match points {
            0 => DVector::zeros(0),
            1 => DVector::from_element(1, start),
            _ => {
                let step = (end - start) / ((points - 1) as f64);
                let mut values = DVector::from_fn(points, |i, _| start + (i as f64) * step);
                values[points - 1] = end;
                values
            }
        };
        SampleGrid { start, end, values }
    }

    /// 與 `new` 相同，但點數超過 `MAX_GRID_POINTS` 時回傳錯誤而不是配置失敗。
    pub fn checked(start: f64, end: f64, points: usize) -> Result<SampleGrid, SampleGridError> {
        if points > MAX_GRID_POINTS {
            return Err(SampleGridError::TooManyPoints { points, max: MAX_GRID_POINTS });
        }
        Ok(SampleGrid::new(start, end, points))
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

impl Default for SampleGrid {
    /// 1000 點，[0, 10]。
    fn default() -> SampleGrid {
        SampleGrid::new(DEFAULT_GRID_START, DEFAULT_GRID_END, DEFAULT_GRID_POINTS)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON
// ─────────────────────────────────────────────────────────────────────────────

fn default_grid_start() -> f64 {
    DEFAULT_GRID_START
}

fn default_grid_end() -> f64 {
    DEFAULT_GRID_END
}

fn default_grid_points() -> usize {
    DEFAULT_GRID_POINTS
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SampleGridJsonProp {
    #[serde(default = "default_grid_start")]
    start: f64,
    #[serde(default = "default_grid_end")]
    end: f64,
    #[serde(default = "default_grid_points")]
    points: usize,
}

impl SampleGridJsonProp {
    pub fn to_grid(&self) -> Result<SampleGrid, SampleGridError> {
        SampleGrid::checked(self.start, self.end, self.points)
    }
}
