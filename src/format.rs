//! Display Formatting
//!
//! Currency labels and photo asset paths for house rows.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thousands::Separable;

/// Directory holding the static house photos
pub const HOUSE_IMAGE_DIR: &str = "./houseImages";
/// Shown when a house has no photo
pub const DEFAULT_PHOTO: &str = "./houseImages/default.jpeg";

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Formats a whole-dollar amount as en-US USD, e.g. `$1,000,000.00`.
pub fn format_price(dollars: u64) -> String {
    format!("${}.00", dollars.separate_with_commas())
}

/// Resolves a photo id to `<dir>/<id>.jpeg`, or the default asset.
pub fn photo_src(photo: Option<&str>) -> String {
    match photo.map(str::trim).filter(|p| !p.is_empty()) {
        Some(id) => format!("{}/{}.jpeg", HOUSE_IMAGE_DIR, utf8_percent_encode(id, SEGMENT)),
        None => DEFAULT_PHOTO.to_string(),
    }
}
