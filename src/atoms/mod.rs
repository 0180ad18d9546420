pub mod filetype;
pub mod glyph;
pub mod storage;
