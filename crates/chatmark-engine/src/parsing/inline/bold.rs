/// Bold emphasis inline type with owned delimiter constant.
///
/// A run is `**` + at least one character + `**`, matched non-greedily and
/// never spanning a line break.
pub struct Bold;

impl Bold {
    /// The marker that opens and closes a bold run.
    pub const MARKER: &'static [u8; 2] = b"**";
}
