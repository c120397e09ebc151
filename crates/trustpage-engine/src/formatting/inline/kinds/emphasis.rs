/// `**bold**`, rendered as `<strong>`.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
    pub const TAG: &'static str = "strong";
}

/// `*italic*`, rendered as `<em>`.
///
/// Strong delimiters are tried first at every position, so `**` is never
/// read as two emphasis delimiters when a strong span can close.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: u8 = b'*';
    pub const TAG: &'static str = "em";
}
