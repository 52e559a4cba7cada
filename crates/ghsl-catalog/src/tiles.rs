//! The fixed global tile partition.
//!
//! GHSL rasters are published per tile to avoid whole-planet downloads.
//! The schema is a regular 18-row by 36-column grid of 10-degree cells in
//! geographic coordinates, named `R{row}_C{col}` with row 1 at the north
//! pole and column 1 at 180W. Built once at startup, never mutated.

use geo::{polygon, Intersects, MultiPolygon, Polygon};
use ghsl_common::{GhslError, GhslResult};

const ROWS: u32 = 18;
const COLS: u32 = 36;
const CELL_DEG: f64 = 10.0;

/// One tile of the global partition.
#[derive(Debug, Clone)]
pub struct Tile {
    /// Schema id, e.g. "R4_C19"
    pub id: String,
    /// Boundary in geographic coordinates
    pub boundary: Polygon<f64>,
}

/// Index over the fixed tile partition.
#[derive(Debug, Clone)]
pub struct TileIndex {
    tiles: Vec<Tile>,
}

impl Default for TileIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TileIndex {
    /// Build the full 18x36 partition.
    pub fn builtin() -> Self {
        let mut tiles = Vec::with_capacity((ROWS * COLS) as usize);
        for row in 1..=ROWS {
            let max_y = 90.0 - (row - 1) as f64 * CELL_DEG;
            let min_y = max_y - CELL_DEG;
            for col in 1..=COLS {
                let min_x = -180.0 + (col - 1) as f64 * CELL_DEG;
                let max_x = min_x + CELL_DEG;
                tiles.push(Tile {
                    id: format!("R{}_C{}", row, col),
                    boundary: polygon![
                        (x: min_x, y: min_y),
                        (x: max_x, y: min_y),
                        (x: max_x, y: max_y),
                        (x: min_x, y: max_y),
                        (x: min_x, y: min_y),
                    ],
                });
            }
        }
        Self { tiles }
    }

    /// Number of tiles in the partition.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile by schema id.
    pub fn get(&self, id: &str) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    /// Every tile whose boundary geometrically intersects the region.
    ///
    /// An empty result is a caller error, not a transient condition.
    pub fn select(&self, region: &MultiPolygon<f64>) -> GhslResult<Vec<&Tile>> {
        let hits: Vec<&Tile> = self
            .tiles
            .iter()
            .filter(|t| t.boundary.intersects(region))
            .collect();

        if hits.is_empty() {
            return Err(GhslError::NoIntersectingTiles);
        }
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn as_region(p: Polygon<f64>) -> MultiPolygon<f64> {
        MultiPolygon::new(vec![p])
    }

    #[test]
    fn test_full_partition() {
        let index = TileIndex::builtin();
        assert_eq!(index.len(), 648);
        assert!(index.get("R1_C1").is_some());
        assert!(index.get("R18_C36").is_some());
        assert!(index.get("R19_C1").is_none());
    }

    #[test]
    fn test_region_inside_one_tile() {
        let index = TileIndex::builtin();
        // Buenos Aires area: lon -58.4, lat -34.6 -> row 13 (30S..40S),
        // col 13 (60W..50W).
        let region = as_region(polygon![
            (x: -58.5, y: -34.7),
            (x: -58.3, y: -34.7),
            (x: -58.3, y: -34.5),
            (x: -58.5, y: -34.5),
            (x: -58.5, y: -34.7),
        ]);
        let tiles = index.select(&region).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].id, "R13_C13");
    }

    #[test]
    fn test_region_straddling_two_tiles() {
        let index = TileIndex::builtin();
        // Straddles the 60W meridian between C12 and C13.
        let region = as_region(polygon![
            (x: -60.5, y: -34.7),
            (x: -59.5, y: -34.7),
            (x: -59.5, y: -34.5),
            (x: -60.5, y: -34.5),
            (x: -60.5, y: -34.7),
        ]);
        let tiles = index.select(&region).unwrap();
        assert!(tiles.len() >= 2);
        for tile in &tiles {
            assert!(tile.boundary.intersects(&region), "{}", tile.id);
        }
    }

    #[test]
    fn test_empty_selection_is_error() {
        let index = TileIndex::builtin();
        // Degenerate region far outside any tile.
        let region = as_region(polygon![
            (x: 500.0, y: 500.0),
            (x: 501.0, y: 500.0),
            (x: 501.0, y: 501.0),
            (x: 500.0, y: 500.0),
        ]);
        assert!(matches!(
            index.select(&region),
            Err(GhslError::NoIntersectingTiles)
        ));
    }
}
