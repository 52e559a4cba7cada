//! The external fetch boundary.

use ghsl_common::GhslResult;
use ghsl_grid::RasterGrid;

/// Opaque, blocking archive fetcher.
///
/// Implementations download the archive at `url`, extract it, and decode
/// every raster band into a [`RasterGrid`] carrying the band's no-data
/// sentinel. The call may fail (network, missing archive, decode); the
/// engine treats a failure as final for that archive; there is no retry.
///
/// Implementations must scope any staging storage (temp dirs for the
/// downloaded archive and extracted files) so it is released on every exit
/// path, including failure, before the call returns.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> GhslResult<Vec<RasterGrid>>;
}

/// Blanket impl so closures can serve as fetchers in tests and embeddings.
impl<F> Fetcher for F
where
    F: Fn(&str) -> GhslResult<Vec<RasterGrid>>,
{
    fn fetch(&self, url: &str) -> GhslResult<Vec<RasterGrid>> {
        self(url)
    }
}
