/// Header line type with owned delimiter constant.
///
/// A trimmed line that both starts and ends with `**` is a header. The text
/// between the markers is taken verbatim.
pub struct Header;

impl Header {
    pub const MARKER: &'static str = "**";

    /// Returns the header text if `trimmed` is a header line.
    ///
    /// Lines too short to hold two markers (`**`, `***`) give an empty header.
    pub fn strip(trimmed: &str) -> Option<&str> {
        if !(trimmed.starts_with(Self::MARKER) && trimmed.ends_with(Self::MARKER)) {
            return None;
        }
        let end = trimmed.len() - Self::MARKER.len();
        Some(trimmed.get(Self::MARKER.len()..end).unwrap_or(""))
    }
}
