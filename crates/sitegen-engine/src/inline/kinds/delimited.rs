use crate::inline::types::SpanKind;

pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
    pub const KIND: SpanKind = SpanKind::Bold;
}

pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "_";
    pub const KIND: SpanKind = SpanKind::Italic;
}

/// Code spans use a single backtick on each side.
pub struct Code;

impl Code {
    pub const DELIMITER: &'static str = "`";
    pub const KIND: SpanKind = SpanKind::Code;
}
