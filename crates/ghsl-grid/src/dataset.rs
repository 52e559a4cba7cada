//! The multi-variable, time-stacked dataset.

use chrono::NaiveDate;
use ndarray::{Array3, ArrayView2, Axis};

use ghsl_common::{GhslError, GhslResult};

use crate::geometry::GridGeometry;
use crate::raster::RasterGrid;

/// One named variable: a (time, row, col) cube.
#[derive(Debug, Clone)]
pub struct DataVariable {
    pub name: String,
    /// Sentinel of the source grids; cells already masked to NaN.
    pub nodata: f64,
    pub data: Array3<f64>,
}

/// Named variables over one shared spatial geometry and one shared,
/// ordered time axis (one coordinate per requested epoch, request order,
/// duplicates preserved).
#[derive(Debug, Clone)]
pub struct Dataset {
    pub geometry: GridGeometry,
    times: Vec<NaiveDate>,
    variables: Vec<DataVariable>,
}

impl Dataset {
    pub fn new(geometry: GridGeometry, times: Vec<NaiveDate>) -> Self {
        Self {
            geometry,
            times,
            variables: Vec::new(),
        }
    }

    /// Time axis coordinates.
    pub fn times(&self) -> &[NaiveDate] {
        &self.times
    }

    /// Variables in insertion (request) order.
    pub fn variables(&self) -> &[DataVariable] {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&DataVariable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// The sole variable of a single-product dataset.
    pub fn single_variable(&self) -> GhslResult<&DataVariable> {
        match self.variables.as_slice() {
            [v] => Ok(v),
            _ => Err(GhslError::GridMismatch(format!(
                "expected exactly one variable, found {}",
                self.variables.len()
            ))),
        }
    }

    /// One spatial slice of a variable.
    pub fn slice<'a>(&self, variable: &'a DataVariable, t: usize) -> ArrayView2<'a, f64> {
        variable.data.index_axis(Axis(0), t)
    }

    /// Stack per-epoch grids of one variable along the time axis.
    ///
    /// The grids must arrive in time-axis order, one per coordinate, all
    /// sharing this dataset's geometry.
    pub fn add_variable(&mut self, grids: Vec<RasterGrid>) -> GhslResult<()> {
        if grids.is_empty() {
            return Err(GhslError::GridMismatch(
                "variable has no time slices".to_string(),
            ));
        }
        if grids.len() != self.times.len() {
            return Err(GhslError::GridMismatch(format!(
                "variable has {} slices but the time axis has {} coordinates",
                grids.len(),
                self.times.len()
            )));
        }
        let first = &grids[0];
        for grid in &grids {
            if grid.geometry != self.geometry {
                return Err(GhslError::GridMismatch(format!(
                    "variable '{}' does not share the dataset geometry",
                    grid.name
                )));
            }
        }

        let mut data = Array3::zeros((grids.len(), self.geometry.height, self.geometry.width));
        for (t, grid) in grids.iter().enumerate() {
            data.index_axis_mut(Axis(0), t).assign(&grid.data);
        }

        self.variables.push(DataVariable {
            name: first.name.clone(),
            nodata: first.nodata,
            data,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghsl_common::{epoch_date, Crs};
    use ndarray::array;

    fn geometry() -> GridGeometry {
        GridGeometry::new(Crs::Mollweide, 0.0, 200.0, 100.0, -100.0, 2, 2)
    }

    fn grid(value: f64) -> RasterGrid {
        RasterGrid::new(
            "GHS_POP",
            geometry(),
            -200.0,
            array![[value, value], [value, value]],
        )
    }

    #[test]
    fn test_time_axis_order_and_length() {
        let times: Vec<_> = [2000, 2010, 2020].iter().map(|&e| epoch_date(e)).collect();
        let mut ds = Dataset::new(geometry(), times);
        ds.add_variable(vec![grid(1.0), grid(2.0), grid(3.0)]).unwrap();

        assert_eq!(ds.times().len(), 3);
        let labels: Vec<String> = ds.times().iter().map(|t| t.to_string()).collect();
        assert_eq!(labels, vec!["2000-01-01", "2010-01-01", "2020-01-01"]);

        let var = ds.single_variable().unwrap();
        assert_eq!(ds.slice(var, 0)[(0, 0)], 1.0);
        assert_eq!(ds.slice(var, 2)[(1, 1)], 3.0);
    }

    #[test]
    fn test_slice_count_must_match_time_axis() {
        let mut ds = Dataset::new(geometry(), vec![epoch_date(2000), epoch_date(2010)]);
        assert!(ds.add_variable(vec![grid(1.0)]).is_err());
    }

    #[test]
    fn test_single_variable_rejects_multi() {
        let mut ds = Dataset::new(geometry(), vec![epoch_date(2000)]);
        ds.add_variable(vec![grid(1.0)]).unwrap();
        let mut second = grid(2.0);
        second.name = "GHS_BUILT_S".to_string();
        ds.add_variable(vec![second]).unwrap();

        assert!(ds.single_variable().is_err());
        assert!(ds.variable("GHS_BUILT_S").is_some());
    }

    #[test]
    fn test_duplicate_epochs_preserved() {
        let times: Vec<_> = [2020, 2020].iter().map(|&e| epoch_date(e)).collect();
        let mut ds = Dataset::new(geometry(), times);
        ds.add_variable(vec![grid(1.0), grid(1.0)]).unwrap();
        assert_eq!(ds.times().len(), 2);
        assert_eq!(ds.times()[0], ds.times()[1]);
    }
}
