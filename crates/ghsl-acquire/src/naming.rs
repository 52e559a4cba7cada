//! GHSL archive naming grammar.
//!
//! Archive base names follow
//! `<urlName>_GLOBE_R<release>_<projection>_<resolution>[_<tile-id>]`
//! where `<urlName>` already embeds product, epoch and (for some products)
//! classification. The directory layout mirrors the JRC open-data FTP
//! tree.

use ghsl_catalog::ProductRequest;

/// JRC open-data root for GHSL archives.
pub const BASE_URL: &str = "https://jeodpp.jrc.ec.europa.eu/ftp/jrc-opendata/GHSL";

/// Data release all bundled products belong to.
pub const RELEASE: &str = "R2023A";

/// Archive version.
pub const VERSION: &str = "V1-0";

/// Projection code for World Mollweide, the distribution CRS.
pub const PROJECTION: &str = "54009";

/// Resolution as embedded in archive names: "100m" -> "100".
fn resolution_code(resolution: &str) -> String {
    resolution.replace('m', "")
}

/// `<urlName>_GLOBE_R2023A_<proj>_<res>` stem shared by directory and file
/// names.
fn archive_stem(request: &ProductRequest, epoch: i32) -> String {
    format!(
        "{}_GLOBE_{}_{}_{}",
        request.url_name(epoch),
        RELEASE,
        PROJECTION,
        resolution_code(&request.resolution),
    )
}

/// URL of the single global archive for a product/epoch.
pub fn global_url(request: &ProductRequest, epoch: i32) -> String {
    let stem = archive_stem(request, epoch);
    format!(
        "{}/{}_GLOBE_{}/{}/{}/{}_{}.zip",
        BASE_URL,
        request.definition.normalized_name,
        RELEASE,
        stem,
        VERSION,
        stem,
        VERSION.replace('-', "_"),
    )
}

/// URL of one tile archive for a product/epoch.
pub fn tile_url(request: &ProductRequest, epoch: i32, tile_id: &str) -> String {
    let stem = archive_stem(request, epoch);
    format!(
        "{}/{}_GLOBE_{}/{}/{}/tiles/{}_{}_{}.zip",
        BASE_URL,
        request.definition.normalized_name,
        RELEASE,
        stem,
        VERSION,
        stem,
        VERSION.replace('-', "_"),
        tile_id,
    )
}
