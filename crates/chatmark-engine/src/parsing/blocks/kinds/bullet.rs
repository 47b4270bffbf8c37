/// Bullet line type with owned marker constants.
pub struct Bullet;

impl Bullet {
    /// The bullet glyph, recognised only when followed by a single space.
    pub const GLYPH: &'static str = "• ";
    /// ASCII markers, recognised when followed by any whitespace.
    pub const MARKERS: [char; 2] = ['-', '*'];

    /// Returns the text after the bullet marker if `trimmed` is a bullet line.
    ///
    /// After the glyph exactly one space is removed; after an ASCII marker the
    /// whole whitespace run is.
    pub fn strip(trimmed: &str) -> Option<&str> {
        if let Some(rest) = trimmed.strip_prefix(Self::GLYPH) {
            return Some(rest);
        }
        let rest = trimmed.strip_prefix(Self::MARKERS)?;
        let body = rest.trim_start();
        (body.len() < rest.len()).then_some(body)
    }
}
