//! Orchestration of catalog, tile index and fetcher into one dataset.

use geo::MultiPolygon;
use tracing::{debug, info, instrument, warn};

use ghsl_catalog::{ProductRequest, RequestSpec, Tile, TileIndex};
use ghsl_common::{epoch_date, GhslError, GhslResult};
use ghsl_grid::{merge_tiles, Dataset, RasterGrid};
use ghsl_projection::geometry_to_mollweide;

use crate::fetcher::Fetcher;
use crate::naming;

/// Builds a consistent multi-variable dataset for a validated request.
///
/// Tile fetches are issued sequentially; the mosaic is commutative over
/// tiles, so the result does not depend on fetch order.
pub struct MosaicEngine<'a, F: Fetcher> {
    tiles: &'a TileIndex,
    fetcher: &'a F,
}

impl<'a, F: Fetcher> MosaicEngine<'a, F> {
    pub fn new(tiles: &'a TileIndex, fetcher: &'a F) -> Self {
        Self { tiles, fetcher }
    }

    /// Build the dataset: one grid per product per epoch, epochs stacked
    /// along the time axis in request order, products merged as variables
    /// over the shared axis.
    #[instrument(skip(self, spec), fields(products = spec.products.len(), epochs = spec.epochs.len()))]
    pub fn build(&self, spec: &RequestSpec) -> GhslResult<Dataset> {
        if spec.epochs.is_empty() {
            return Err(GhslError::GridMismatch(
                "request names no epochs".to_string(),
            ));
        }

        // Resolve the tile set up front: an empty intersection is a caller
        // error and must fail before any fetch.
        let region = spec.region.as_ref().map(|r| r.to_multi_polygon());
        let selection = match &region {
            Some(r) => {
                let tiles = self.tiles.select(r)?;
                info!(tiles = tiles.len(), "selected tiles for region");
                Some((geometry_to_mollweide(r), tiles))
            }
            None => None,
        };

        let mut dataset: Option<Dataset> = None;
        for product in &spec.products {
            let mut slices = Vec::with_capacity(spec.epochs.len());
            for &epoch in &spec.epochs {
                let grid = match &selection {
                    None => self.fetch_global(product, epoch)?,
                    Some((region_native, tiles)) => {
                        self.fetch_and_merge_tiles(product, epoch, tiles, region_native)?
                    }
                };
                slices.push(grid);
            }

            let ds = dataset.get_or_insert_with(|| {
                let times = spec.epochs.iter().map(|&e| epoch_date(e)).collect();
                Dataset::new(slices[0].geometry, times)
            });
            ds.add_variable(slices)?;
        }

        // RequestSpec validation guarantees at least one product.
        dataset.ok_or_else(|| GhslError::GridMismatch("request names no products".to_string()))
    }

    /// Fetch the single global archive for a product/epoch.
    fn fetch_global(&self, product: &ProductRequest, epoch: i32) -> GhslResult<RasterGrid> {
        let url = naming::global_url(product, epoch);
        info!(%url, "fetching global archive");
        let bands = self.fetcher.fetch(&url)?;
        let mut grid = primary_band(bands, &url)?;
        grid.name = product.definition.normalized_name.to_string();
        grid.mask_nodata();
        Ok(grid)
    }

    /// Fetch every intersecting tile for a product/epoch, clip each to the
    /// region, and mosaic the survivors.
    ///
    /// A failed tile is recovered locally: logged as a warning and
    /// excluded from the merge. Zero surviving tiles escalate to
    /// `NoDataAvailable`. Differing sentinels among survivors fail hard in
    /// the merge.
    fn fetch_and_merge_tiles(
        &self,
        product: &ProductRequest,
        epoch: i32,
        tiles: &[&Tile],
        region_native: &MultiPolygon<f64>,
    ) -> GhslResult<RasterGrid> {
        let mut usable = Vec::with_capacity(tiles.len());
        let mut failed = Vec::new();

        for tile in tiles {
            let url = naming::tile_url(product, epoch, &tile.id);
            debug!(tile = %tile.id, %url, "fetching tile");
            let result = self
                .fetcher
                .fetch(&url)
                .and_then(|bands| primary_band(bands, &url))
                .and_then(|band| band.clip(region_native));
            match result {
                Ok(grid) => usable.push(grid),
                Err(e) => {
                    warn!(tile = %tile.id, error = %e, "failed to fetch tile, skipping");
                    failed.push(tile.id.clone());
                }
            }
        }

        if usable.is_empty() {
            return Err(GhslError::NoDataAvailable {
                product: product.definition.id.to_string(),
                epoch,
            });
        }
        if !failed.is_empty() {
            warn!(
                failed = failed.join(", "),
                usable = usable.len(),
                "continuing with partial tile coverage"
            );
        }

        let mut merged = merge_tiles(&usable)?;
        merged.name = product.definition.normalized_name.to_string();
        merged.mask_nodata();
        Ok(merged)
    }
}

/// Select the product band from an archive's rasters.
///
/// GHSL archives carry one band per variable; all bands must agree on the
/// sentinel (a mismatch within one archive is the same integrity defect as
/// one across tiles).
fn primary_band(bands: Vec<RasterGrid>, url: &str) -> GhslResult<RasterGrid> {
    let mut iter = bands.into_iter();
    let first = iter.next().ok_or_else(|| GhslError::FetchFailed {
        url: url.to_string(),
        message: "archive contained no raster bands".to_string(),
    })?;
    for band in iter {
        if band.nodata != first.nodata {
            return Err(GhslError::InconsistentNoDataValue {
                expected: first.nodata,
                found: band.nodata,
            });
        }
    }
    Ok(first)
}
