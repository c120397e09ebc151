/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: emphasis is not parsed inside them, and
/// emphasis closers are not searched for inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
    pub const TAG: &'static str = "code";
    /// A rendered code element, also a raw zone when re-parsing output.
    pub const ELEMENT_OPEN: &'static [u8] = b"<code>";
    pub const ELEMENT_CLOSE: &'static [u8] = b"</code>";
}
