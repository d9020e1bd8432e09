//! Unicode property tables used by grapheme segmentation and classification.
//!
//! Generated from the Unicode Character Database (`GraphemeBreakProperty.txt`,
//! `emoji-data.txt`, `DerivedCoreProperties.txt`, `UnicodeData.txt`). Do not
//! edit by hand.

use super::category::{GraphemeBreak, IndicConjunctBreak};

/// `Grapheme_Cluster_Break` ranges, sorted and non-overlapping.
///
/// Hangul syllables (`LV`/`LVT`) are computed arithmetically and are absent here.
#[rustfmt::skip]
pub(crate) const GRAPHEME_BREAK: &[(u32, u32, GraphemeBreak)] = &[
    (0x0000, 0x0009, GraphemeBreak::Control),
    (0x000A, 0x000A, GraphemeBreak::LF),
    (0x000B, 0x000C, GraphemeBreak::Control),
    (0x000D, 0x000D, GraphemeBreak::CR),
    (0x000E, 0x001F, GraphemeBreak::Control),
    (0x007F, 0x009F, GraphemeBreak::Control),
    (0x00AD, 0x00AD, GraphemeBreak::Control),
    (0x0300, 0x036F, GraphemeBreak::Extend),
    (0x0483, 0x0489, GraphemeBreak::Extend),
    (0x0591, 0x05BD, GraphemeBreak::Extend),
    (0x05BF, 0x05BF, GraphemeBreak::Extend),
    (0x05C1, 0x05C2, GraphemeBreak::Extend),
    (0x05C4, 0x05C5, GraphemeBreak::Extend),
    (0x05C7, 0x05C7, GraphemeBreak::Extend),
    (0x0600, 0x0605, GraphemeBreak::Prepend),
    (0x0610, 0x061A, GraphemeBreak::Extend),
    (0x061C, 0x061C, GraphemeBreak::Control),
    (0x064B, 0x065F, GraphemeBreak::Extend),
    (0x0670, 0x0670, GraphemeBreak::Extend),
    (0x06D6, 0x06DC, GraphemeBreak::Extend),
    (0x06DD, 0x06DD, GraphemeBreak::Prepend),
    (0x06DF, 0x06E4, GraphemeBreak::Extend),
    (0x06E7, 0x06E8, GraphemeBreak::Extend),
    (0x06EA, 0x06ED, GraphemeBreak::Extend),
    (0x070F, 0x070F, GraphemeBreak::Prepend),
    (0x0711, 0x0711, GraphemeBreak::Extend),
    (0x0730, 0x074A, GraphemeBreak::Extend),
    (0x07A6, 0x07B0, GraphemeBreak::Extend),
    (0x07EB, 0x07F3, GraphemeBreak::Extend),
    (0x07FD, 0x07FD, GraphemeBreak::Extend),
    (0x0816, 0x0819, GraphemeBreak::Extend),
    (0x081B, 0x0823, GraphemeBreak::Extend),
    (0x0825, 0x0827, GraphemeBreak::Extend),
    (0x0829, 0x082D, GraphemeBreak::Extend),
    (0x0859, 0x085B, GraphemeBreak::Extend),
    (0x0890, 0x0891, GraphemeBreak::Prepend),
    (0x0897, 0x089F, GraphemeBreak::Extend),
    (0x08CA, 0x08E1, GraphemeBreak::Extend),
    (0x08E2, 0x08E2, GraphemeBreak::Prepend),
    (0x08E3, 0x0902, GraphemeBreak::Extend),
    (0x0903, 0x0903, GraphemeBreak::SpacingMark),
    (0x093A, 0x093A, GraphemeBreak::Extend),
    (0x093B, 0x093B, GraphemeBreak::SpacingMark),
    (0x093C, 0x093C, GraphemeBreak::Extend),
    (0x093E, 0x0940, GraphemeBreak::SpacingMark),
    (0x0941, 0x0948, GraphemeBreak::Extend),
    (0x0949, 0x094C, GraphemeBreak::SpacingMark),
    (0x094D, 0x094D, GraphemeBreak::Extend),
    (0x094E, 0x094F, GraphemeBreak::SpacingMark),
    (0x0951, 0x0957, GraphemeBreak::Extend),
    (0x0962, 0x0963, GraphemeBreak::Extend),
    (0x0981, 0x0981, GraphemeBreak::Extend),
    (0x0982, 0x0983, GraphemeBreak::SpacingMark),
    (0x09BC, 0x09BC, GraphemeBreak::Extend),
    (0x09BE, 0x09BE, GraphemeBreak::Extend),
    (0x09BF, 0x09C0, GraphemeBreak::SpacingMark),
    (0x09C1, 0x09C4, GraphemeBreak::Extend),
    (0x09C7, 0x09C8, GraphemeBreak::SpacingMark),
    (0x09CB, 0x09CC, GraphemeBreak::SpacingMark),
    (0x09CD, 0x09CD, GraphemeBreak::Extend),
    (0x09D7, 0x09D7, GraphemeBreak::Extend),
    (0x09E2, 0x09E3, GraphemeBreak::Extend),
    (0x09FE, 0x09FE, GraphemeBreak::Extend),
    (0x0A01, 0x0A02, GraphemeBreak::Extend),
    (0x0A03, 0x0A03, GraphemeBreak::SpacingMark),
    (0x0A3C, 0x0A3C, GraphemeBreak::Extend),
    (0x0A3E, 0x0A40, GraphemeBreak::SpacingMark),
    (0x0A41, 0x0A42, GraphemeBreak::Extend),
    (0x0A47, 0x0A48, GraphemeBreak::Extend),
    (0x0A4B, 0x0A4D, GraphemeBreak::Extend),
    (0x0A51, 0x0A51, GraphemeBreak::Extend),
    (0x0A70, 0x0A71, GraphemeBreak::Extend),
    (0x0A75, 0x0A75, GraphemeBreak::Extend),
    (0x0A81, 0x0A82, GraphemeBreak::Extend),
    (0x0A83, 0x0A83, GraphemeBreak::SpacingMark),
    (0x0ABC, 0x0ABC, GraphemeBreak::Extend),
    (0x0ABE, 0x0AC0, GraphemeBreak::SpacingMark),
    (0x0AC1, 0x0AC5, GraphemeBreak::Extend),
    (0x0AC7, 0x0AC8, GraphemeBreak::Extend),
    (0x0AC9, 0x0AC9, GraphemeBreak::SpacingMark),
    (0x0ACB, 0x0ACC, GraphemeBreak::SpacingMark),
    (0x0ACD, 0x0ACD, GraphemeBreak::Extend),
    (0x0AE2, 0x0AE3, GraphemeBreak::Extend),
    (0x0AFA, 0x0AFF, GraphemeBreak::Extend),
    (0x0B01, 0x0B01, GraphemeBreak::Extend),
    (0x0B02, 0x0B03, GraphemeBreak::SpacingMark),
    (0x0B3C, 0x0B3C, GraphemeBreak::Extend),
    (0x0B3E, 0x0B3F, GraphemeBreak::Extend),
    (0x0B40, 0x0B40, GraphemeBreak::SpacingMark),
    (0x0B41, 0x0B44, GraphemeBreak::Extend),
    (0x0B47, 0x0B48, GraphemeBreak::SpacingMark),
    (0x0B4B, 0x0B4C, GraphemeBreak::SpacingMark),
    (0x0B4D, 0x0B4D, GraphemeBreak::Extend),
    (0x0B55, 0x0B57, GraphemeBreak::Extend),
    (0x0B62, 0x0B63, GraphemeBreak::Extend),
    (0x0B82, 0x0B82, GraphemeBreak::Extend),
    (0x0BBE, 0x0BBE, GraphemeBreak::Extend),
    (0x0BBF, 0x0BBF, GraphemeBreak::SpacingMark),
    (0x0BC0, 0x0BC0, GraphemeBreak::Extend),
    (0x0BC1, 0x0BC2, GraphemeBreak::SpacingMark),
    (0x0BC6, 0x0BC8, GraphemeBreak::SpacingMark),
    (0x0BCA, 0x0BCC, GraphemeBreak::SpacingMark),
    (0x0BCD, 0x0BCD, GraphemeBreak::Extend),
    (0x0BD7, 0x0BD7, GraphemeBreak::Extend),
    (0x0C00, 0x0C00, GraphemeBreak::Extend),
    (0x0C01, 0x0C03, GraphemeBreak::SpacingMark),
    (0x0C04, 0x0C04, GraphemeBreak::Extend),
    (0x0C3C, 0x0C3C, GraphemeBreak::Extend),
    (0x0C3E, 0x0C40, GraphemeBreak::Extend),
    (0x0C41, 0x0C44, GraphemeBreak::SpacingMark),
    (0x0C46, 0x0C48, GraphemeBreak::Extend),
    (0x0C4A, 0x0C4D, GraphemeBreak::Extend),
    (0x0C55, 0x0C56, GraphemeBreak::Extend),
    (0x0C62, 0x0C63, GraphemeBreak::Extend),
    (0x0C81, 0x0C81, GraphemeBreak::Extend),
    (0x0C82, 0x0C83, GraphemeBreak::SpacingMark),
    (0x0CBC, 0x0CBC, GraphemeBreak::Extend),
    (0x0CBE, 0x0CBE, GraphemeBreak::SpacingMark),
    (0x0CBF, 0x0CC0, GraphemeBreak::Extend),
    (0x0CC1, 0x0CC1, GraphemeBreak::SpacingMark),
    (0x0CC2, 0x0CC2, GraphemeBreak::Extend),
    (0x0CC3, 0x0CC4, GraphemeBreak::SpacingMark),
    (0x0CC6, 0x0CC8, GraphemeBreak::Extend),
    (0x0CCA, 0x0CCD, GraphemeBreak::Extend),
    (0x0CD5, 0x0CD6, GraphemeBreak::Extend),
    (0x0CE2, 0x0CE3, GraphemeBreak::Extend),
    (0x0CF3, 0x0CF3, GraphemeBreak::SpacingMark),
    (0x0D00, 0x0D01, GraphemeBreak::Extend),
    (0x0D02, 0x0D03, GraphemeBreak::SpacingMark),
    (0x0D3B, 0x0D3C, GraphemeBreak::Extend),
    (0x0D3E, 0x0D3E, GraphemeBreak::Extend),
    (0x0D3F, 0x0D40, GraphemeBreak::SpacingMark),
    (0x0D41, 0x0D44, GraphemeBreak::Extend),
    (0x0D46, 0x0D48, GraphemeBreak::SpacingMark),
    (0x0D4A, 0x0D4C, GraphemeBreak::SpacingMark),
    (0x0D4D, 0x0D4D, GraphemeBreak::Extend),
    (0x0D4E, 0x0D4E, GraphemeBreak::Prepend),
    (0x0D57, 0x0D57, GraphemeBreak::Extend),
    (0x0D62, 0x0D63, GraphemeBreak::Extend),
    (0x0D81, 0x0D81, GraphemeBreak::Extend),
    (0x0D82, 0x0D83, GraphemeBreak::SpacingMark),
    (0x0DCA, 0x0DCA, GraphemeBreak::Extend),
    (0x0DCF, 0x0DCF, GraphemeBreak::Extend),
    (0x0DD0, 0x0DD1, GraphemeBreak::SpacingMark),
    (0x0DD2, 0x0DD4, GraphemeBreak::Extend),
    (0x0DD6, 0x0DD6, GraphemeBreak::Extend),
    (0x0DD8, 0x0DDE, GraphemeBreak::SpacingMark),
    (0x0DDF, 0x0DDF, GraphemeBreak::Extend),
    (0x0DF2, 0x0DF3, GraphemeBreak::SpacingMark),
    (0x0E31, 0x0E31, GraphemeBreak::Extend),
    (0x0E33, 0x0E33, GraphemeBreak::SpacingMark),
    (0x0E34, 0x0E3A, GraphemeBreak::Extend),
    (0x0E47, 0x0E4E, GraphemeBreak::Extend),
    (0x0EB1, 0x0EB1, GraphemeBreak::Extend),
    (0x0EB3, 0x0EB3, GraphemeBreak::SpacingMark),
    (0x0EB4, 0x0EBC, GraphemeBreak::Extend),
    (0x0EC8, 0x0ECE, GraphemeBreak::Extend),
    (0x0F18, 0x0F19, GraphemeBreak::Extend),
    (0x0F35, 0x0F35, GraphemeBreak::Extend),
    (0x0F37, 0x0F37, GraphemeBreak::Extend),
    (0x0F39, 0x0F39, GraphemeBreak::Extend),
    (0x0F3E, 0x0F3F, GraphemeBreak::SpacingMark),
    (0x0F71, 0x0F7E, GraphemeBreak::Extend),
    (0x0F7F, 0x0F7F, GraphemeBreak::SpacingMark),
    (0x0F80, 0x0F84, GraphemeBreak::Extend),
    (0x0F86, 0x0F87, GraphemeBreak::Extend),
    (0x0F8D, 0x0F97, GraphemeBreak::Extend),
    (0x0F99, 0x0FBC, GraphemeBreak::Extend),
    (0x0FC6, 0x0FC6, GraphemeBreak::Extend),
    (0x102D, 0x1030, GraphemeBreak::Extend),
    (0x1031, 0x1031, GraphemeBreak::SpacingMark),
    (0x1032, 0x1037, GraphemeBreak::Extend),
    (0x1039, 0x103A, GraphemeBreak::Extend),
    (0x103B, 0x103C, GraphemeBreak::SpacingMark),
    (0x103D, 0x103E, GraphemeBreak::Extend),
    (0x1056, 0x1057, GraphemeBreak::SpacingMark),
    (0x1058, 0x1059, GraphemeBreak::Extend),
    (0x105E, 0x1060, GraphemeBreak::Extend),
    (0x1071, 0x1074, GraphemeBreak::Extend),
    (0x1082, 0x1082, GraphemeBreak::Extend),
    (0x1084, 0x1084, GraphemeBreak::SpacingMark),
    (0x1085, 0x1086, GraphemeBreak::Extend),
    (0x108D, 0x108D, GraphemeBreak::Extend),
    (0x109D, 0x109D, GraphemeBreak::Extend),
    (0x1100, 0x115F, GraphemeBreak::L),
    (0x1160, 0x11A7, GraphemeBreak::V),
    (0x11A8, 0x11FF, GraphemeBreak::T),
    (0x135D, 0x135F, GraphemeBreak::Extend),
    (0x1712, 0x1715, GraphemeBreak::Extend),
    (0x1732, 0x1734, GraphemeBreak::Extend),
    (0x1752, 0x1753, GraphemeBreak::Extend),
    (0x1772, 0x1773, GraphemeBreak::Extend),
    (0x17B4, 0x17B5, GraphemeBreak::Extend),
    (0x17B6, 0x17B6, GraphemeBreak::SpacingMark),
    (0x17B7, 0x17BD, GraphemeBreak::Extend),
    (0x17BE, 0x17C5, GraphemeBreak::SpacingMark),
    (0x17C6, 0x17C6, GraphemeBreak::Extend),
    (0x17C7, 0x17C8, GraphemeBreak::SpacingMark),
    (0x17C9, 0x17D3, GraphemeBreak::Extend),
    (0x17DD, 0x17DD, GraphemeBreak::Extend),
    (0x180B, 0x180D, GraphemeBreak::Extend),
    (0x180E, 0x180E, GraphemeBreak::Control),
    (0x180F, 0x180F, GraphemeBreak::Extend),
    (0x1885, 0x1886, GraphemeBreak::Extend),
    (0x18A9, 0x18A9, GraphemeBreak::Extend),
    (0x1920, 0x1922, GraphemeBreak::Extend),
    (0x1923, 0x1926, GraphemeBreak::SpacingMark),
    (0x1927, 0x1928, GraphemeBreak::Extend),
    (0x1929, 0x192B, GraphemeBreak::SpacingMark),
    (0x1930, 0x1931, GraphemeBreak::SpacingMark),
    (0x1932, 0x1932, GraphemeBreak::Extend),
    (0x1933, 0x1938, GraphemeBreak::SpacingMark),
    (0x1939, 0x193B, GraphemeBreak::Extend),
    (0x1A17, 0x1A18, GraphemeBreak::Extend),
    (0x1A19, 0x1A1A, GraphemeBreak::SpacingMark),
    (0x1A1B, 0x1A1B, GraphemeBreak::Extend),
    (0x1A55, 0x1A55, GraphemeBreak::SpacingMark),
    (0x1A56, 0x1A56, GraphemeBreak::Extend),
    (0x1A57, 0x1A57, GraphemeBreak::SpacingMark),
    (0x1A58, 0x1A5E, GraphemeBreak::Extend),
    (0x1A60, 0x1A60, GraphemeBreak::Extend),
    (0x1A62, 0x1A62, GraphemeBreak::Extend),
    (0x1A65, 0x1A6C, GraphemeBreak::Extend),
    (0x1A6D, 0x1A72, GraphemeBreak::SpacingMark),
    (0x1A73, 0x1A7C, GraphemeBreak::Extend),
    (0x1A7F, 0x1A7F, GraphemeBreak::Extend),
    (0x1AB0, 0x1ADD, GraphemeBreak::Extend),
    (0x1AE0, 0x1AEB, GraphemeBreak::Extend),
    (0x1B00, 0x1B03, GraphemeBreak::Extend),
    (0x1B04, 0x1B04, GraphemeBreak::SpacingMark),
    (0x1B34, 0x1B3D, GraphemeBreak::Extend),
    (0x1B3E, 0x1B41, GraphemeBreak::SpacingMark),
    (0x1B42, 0x1B44, GraphemeBreak::Extend),
    (0x1B6B, 0x1B73, GraphemeBreak::Extend),
    (0x1B80, 0x1B81, GraphemeBreak::Extend),
    (0x1B82, 0x1B82, GraphemeBreak::SpacingMark),
    (0x1BA1, 0x1BA1, GraphemeBreak::SpacingMark),
    (0x1BA2, 0x1BA5, GraphemeBreak::Extend),
    (0x1BA6, 0x1BA7, GraphemeBreak::SpacingMark),
    (0x1BA8, 0x1BAD, GraphemeBreak::Extend),
    (0x1BE6, 0x1BE6, GraphemeBreak::Extend),
    (0x1BE7, 0x1BE7, GraphemeBreak::SpacingMark),
    (0x1BE8, 0x1BE9, GraphemeBreak::Extend),
    (0x1BEA, 0x1BEC, GraphemeBreak::SpacingMark),
    (0x1BED, 0x1BED, GraphemeBreak::Extend),
    (0x1BEE, 0x1BEE, GraphemeBreak::SpacingMark),
    (0x1BEF, 0x1BF3, GraphemeBreak::Extend),
    (0x1C24, 0x1C2B, GraphemeBreak::SpacingMark),
    (0x1C2C, 0x1C33, GraphemeBreak::Extend),
    (0x1C34, 0x1C35, GraphemeBreak::SpacingMark),
    (0x1C36, 0x1C37, GraphemeBreak::Extend),
    (0x1CD0, 0x1CD2, GraphemeBreak::Extend),
    (0x1CD4, 0x1CE0, GraphemeBreak::Extend),
    (0x1CE1, 0x1CE1, GraphemeBreak::SpacingMark),
    (0x1CE2, 0x1CE8, GraphemeBreak::Extend),
    (0x1CED, 0x1CED, GraphemeBreak::Extend),
    (0x1CF4, 0x1CF4, GraphemeBreak::Extend),
    (0x1CF7, 0x1CF7, GraphemeBreak::SpacingMark),
    (0x1CF8, 0x1CF9, GraphemeBreak::Extend),
    (0x1DC0, 0x1DFF, GraphemeBreak::Extend),
    (0x200B, 0x200B, GraphemeBreak::Control),
    (0x200C, 0x200C, GraphemeBreak::Extend),
    (0x200D, 0x200D, GraphemeBreak::ZWJ),
    (0x200E, 0x200F, GraphemeBreak::Control),
    (0x2028, 0x202E, GraphemeBreak::Control),
    (0x2060, 0x206F, GraphemeBreak::Control),
    (0x20D0, 0x20F0, GraphemeBreak::Extend),
    (0x2CEF, 0x2CF1, GraphemeBreak::Extend),
    (0x2D7F, 0x2D7F, GraphemeBreak::Extend),
    (0x2DE0, 0x2DFF, GraphemeBreak::Extend),
    (0x302A, 0x302F, GraphemeBreak::Extend),
    (0x3099, 0x309A, GraphemeBreak::Extend),
    (0xA66F, 0xA672, GraphemeBreak::Extend),
    (0xA674, 0xA67D, GraphemeBreak::Extend),
    (0xA69E, 0xA69F, GraphemeBreak::Extend),
    (0xA6F0, 0xA6F1, GraphemeBreak::Extend),
    (0xA802, 0xA802, GraphemeBreak::Extend),
    (0xA806, 0xA806, GraphemeBreak::Extend),
    (0xA80B, 0xA80B, GraphemeBreak::Extend),
    (0xA823, 0xA824, GraphemeBreak::SpacingMark),
    (0xA825, 0xA826, GraphemeBreak::Extend),
    (0xA827, 0xA827, GraphemeBreak::SpacingMark),
    (0xA82C, 0xA82C, GraphemeBreak::Extend),
    (0xA880, 0xA881, GraphemeBreak::SpacingMark),
    (0xA8B4, 0xA8C3, GraphemeBreak::SpacingMark),
    (0xA8C4, 0xA8C5, GraphemeBreak::Extend),
    (0xA8E0, 0xA8F1, GraphemeBreak::Extend),
    (0xA8FF, 0xA8FF, GraphemeBreak::Extend),
    (0xA926, 0xA92D, GraphemeBreak::Extend),
    (0xA947, 0xA951, GraphemeBreak::Extend),
    (0xA952, 0xA952, GraphemeBreak::SpacingMark),
    (0xA953, 0xA953, GraphemeBreak::Extend),
    (0xA960, 0xA97C, GraphemeBreak::L),
    (0xA980, 0xA982, GraphemeBreak::Extend),
    (0xA983, 0xA983, GraphemeBreak::SpacingMark),
    (0xA9B3, 0xA9B3, GraphemeBreak::Extend),
    (0xA9B4, 0xA9B5, GraphemeBreak::SpacingMark),
    (0xA9B6, 0xA9B9, GraphemeBreak::Extend),
    (0xA9BA, 0xA9BB, GraphemeBreak::SpacingMark),
    (0xA9BC, 0xA9BD, GraphemeBreak::Extend),
    (0xA9BE, 0xA9BF, GraphemeBreak::SpacingMark),
    (0xA9C0, 0xA9C0, GraphemeBreak::Extend),
    (0xA9E5, 0xA9E5, GraphemeBreak::Extend),
    (0xAA29, 0xAA2E, GraphemeBreak::Extend),
    (0xAA2F, 0xAA30, GraphemeBreak::SpacingMark),
    (0xAA31, 0xAA32, GraphemeBreak::Extend),
    (0xAA33, 0xAA34, GraphemeBreak::SpacingMark),
    (0xAA35, 0xAA36, GraphemeBreak::Extend),
    (0xAA43, 0xAA43, GraphemeBreak::Extend),
    (0xAA4C, 0xAA4C, GraphemeBreak::Extend),
    (0xAA4D, 0xAA4D, GraphemeBreak::SpacingMark),
    (0xAA7C, 0xAA7C, GraphemeBreak::Extend),
    (0xAAB0, 0xAAB0, GraphemeBreak::Extend),
    (0xAAB2, 0xAAB4, GraphemeBreak::Extend),
    (0xAAB7, 0xAAB8, GraphemeBreak::Extend),
    (0xAABE, 0xAABF, GraphemeBreak::Extend),
    (0xAAC1, 0xAAC1, GraphemeBreak::Extend),
    (0xAAEB, 0xAAEB, GraphemeBreak::SpacingMark),
    (0xAAEC, 0xAAED, GraphemeBreak::Extend),
    (0xAAEE, 0xAAEF, GraphemeBreak::SpacingMark),
    (0xAAF5, 0xAAF5, GraphemeBreak::SpacingMark),
    (0xAAF6, 0xAAF6, GraphemeBreak::Extend),
    (0xABE3, 0xABE4, GraphemeBreak::SpacingMark),
    (0xABE5, 0xABE5, GraphemeBreak::Extend),
    (0xABE6, 0xABE7, GraphemeBreak::SpacingMark),
    (0xABE8, 0xABE8, GraphemeBreak::Extend),
    (0xABE9, 0xABEA, GraphemeBreak::SpacingMark),
    (0xABEC, 0xABEC, GraphemeBreak::SpacingMark),
    (0xABED, 0xABED, GraphemeBreak::Extend),
    (0xD7B0, 0xD7C6, GraphemeBreak::V),
    (0xD7CB, 0xD7FB, GraphemeBreak::T),
    (0xFB1E, 0xFB1E, GraphemeBreak::Extend),
    (0xFE00, 0xFE0F, GraphemeBreak::Extend),
    (0xFE20, 0xFE2F, GraphemeBreak::Extend),
    (0xFEFF, 0xFEFF, GraphemeBreak::Control),
    (0xFF9E, 0xFF9F, GraphemeBreak::Extend),
    (0xFFF0, 0xFFFB, GraphemeBreak::Control),
    (0x101FD, 0x101FD, GraphemeBreak::Extend),
    (0x102E0, 0x102E0, GraphemeBreak::Extend),
    (0x10376, 0x1037A, GraphemeBreak::Extend),
    (0x10A01, 0x10A03, GraphemeBreak::Extend),
    (0x10A05, 0x10A06, GraphemeBreak::Extend),
    (0x10A0C, 0x10A0F, GraphemeBreak::Extend),
    (0x10A38, 0x10A3A, GraphemeBreak::Extend),
    (0x10A3F, 0x10A3F, GraphemeBreak::Extend),
    (0x10AE5, 0x10AE6, GraphemeBreak::Extend),
    (0x10D24, 0x10D27, GraphemeBreak::Extend),
    (0x10D69, 0x10D6D, GraphemeBreak::Extend),
    (0x10EAB, 0x10EAC, GraphemeBreak::Extend),
    (0x10EFA, 0x10EFF, GraphemeBreak::Extend),
    (0x10F46, 0x10F50, GraphemeBreak::Extend),
    (0x10F82, 0x10F85, GraphemeBreak::Extend),
    (0x11000, 0x11000, GraphemeBreak::SpacingMark),
    (0x11001, 0x11001, GraphemeBreak::Extend),
    (0x11002, 0x11002, GraphemeBreak::SpacingMark),
    (0x11038, 0x11046, GraphemeBreak::Extend),
    (0x11070, 0x11070, GraphemeBreak::Extend),
    (0x11073, 0x11074, GraphemeBreak::Extend),
    (0x1107F, 0x11081, GraphemeBreak::Extend),
    (0x11082, 0x11082, GraphemeBreak::SpacingMark),
    (0x110B0, 0x110B2, GraphemeBreak::SpacingMark),
    (0x110B3, 0x110B6, GraphemeBreak::Extend),
    (0x110B7, 0x110B8, GraphemeBreak::SpacingMark),
    (0x110B9, 0x110BA, GraphemeBreak::Extend),
    (0x110BD, 0x110BD, GraphemeBreak::Prepend),
    (0x110C2, 0x110C2, GraphemeBreak::Extend),
    (0x110CD, 0x110CD, GraphemeBreak::Prepend),
    (0x11100, 0x11102, GraphemeBreak::Extend),
    (0x11127, 0x1112B, GraphemeBreak::Extend),
    (0x1112C, 0x1112C, GraphemeBreak::SpacingMark),
    (0x1112D, 0x11134, GraphemeBreak::Extend),
    (0x11145, 0x11146, GraphemeBreak::SpacingMark),
    (0x11173, 0x11173, GraphemeBreak::Extend),
    (0x11180, 0x11181, GraphemeBreak::Extend),
    (0x11182, 0x11182, GraphemeBreak::SpacingMark),
    (0x111B3, 0x111B5, GraphemeBreak::SpacingMark),
    (0x111B6, 0x111BE, GraphemeBreak::Extend),
    (0x111BF, 0x111BF, GraphemeBreak::SpacingMark),
    (0x111C0, 0x111C0, GraphemeBreak::Extend),
    (0x111C2, 0x111C3, GraphemeBreak::Prepend),
    (0x111C9, 0x111CC, GraphemeBreak::Extend),
    (0x111CE, 0x111CE, GraphemeBreak::SpacingMark),
    (0x111CF, 0x111CF, GraphemeBreak::Extend),
    (0x1122C, 0x1122E, GraphemeBreak::SpacingMark),
    (0x1122F, 0x11231, GraphemeBreak::Extend),
    (0x11232, 0x11233, GraphemeBreak::SpacingMark),
    (0x11234, 0x11237, GraphemeBreak::Extend),
    (0x1123E, 0x1123E, GraphemeBreak::Extend),
    (0x11241, 0x11241, GraphemeBreak::Extend),
    (0x112DF, 0x112DF, GraphemeBreak::Extend),
    (0x112E0, 0x112E2, GraphemeBreak::SpacingMark),
    (0x112E3, 0x112EA, GraphemeBreak::Extend),
    (0x11300, 0x11301, GraphemeBreak::Extend),
    (0x11302, 0x11303, GraphemeBreak::SpacingMark),
    (0x1133B, 0x1133C, GraphemeBreak::Extend),
    (0x1133E, 0x1133E, GraphemeBreak::Extend),
    (0x1133F, 0x1133F, GraphemeBreak::SpacingMark),
    (0x11340, 0x11340, GraphemeBreak::Extend),
    (0x11341, 0x11344, GraphemeBreak::SpacingMark),
    (0x11347, 0x11348, GraphemeBreak::SpacingMark),
    (0x1134B, 0x1134C, GraphemeBreak::SpacingMark),
    (0x1134D, 0x1134D, GraphemeBreak::Extend),
    (0x11357, 0x11357, GraphemeBreak::Extend),
    (0x11362, 0x11363, GraphemeBreak::SpacingMark),
    (0x11366, 0x1136C, GraphemeBreak::Extend),
    (0x11370, 0x11374, GraphemeBreak::Extend),
    (0x113B8, 0x113B8, GraphemeBreak::Extend),
    (0x113B9, 0x113BA, GraphemeBreak::SpacingMark),
    (0x113BB, 0x113C0, GraphemeBreak::Extend),
    (0x113C2, 0x113C2, GraphemeBreak::Extend),
    (0x113C5, 0x113C5, GraphemeBreak::Extend),
    (0x113C7, 0x113C9, GraphemeBreak::Extend),
    (0x113CA, 0x113CA, GraphemeBreak::SpacingMark),
    (0x113CC, 0x113CD, GraphemeBreak::SpacingMark),
    (0x113CE, 0x113D0, GraphemeBreak::Extend),
    (0x113D1, 0x113D1, GraphemeBreak::Prepend),
    (0x113D2, 0x113D2, GraphemeBreak::Extend),
    (0x113E1, 0x113E2, GraphemeBreak::Extend),
    (0x11435, 0x11437, GraphemeBreak::SpacingMark),
    (0x11438, 0x1143F, GraphemeBreak::Extend),
    (0x11440, 0x11441, GraphemeBreak::SpacingMark),
    (0x11442, 0x11444, GraphemeBreak::Extend),
    (0x11445, 0x11445, GraphemeBreak::SpacingMark),
    (0x11446, 0x11446, GraphemeBreak::Extend),
    (0x1145E, 0x1145E, GraphemeBreak::Extend),
    (0x114B0, 0x114B0, GraphemeBreak::Extend),
    (0x114B1, 0x114B2, GraphemeBreak::SpacingMark),
    (0x114B3, 0x114B8, GraphemeBreak::Extend),
    (0x114B9, 0x114B9, GraphemeBreak::SpacingMark),
    (0x114BA, 0x114BA, GraphemeBreak::Extend),
    (0x114BB, 0x114BC, GraphemeBreak::SpacingMark),
    (0x114BD, 0x114BD, GraphemeBreak::Extend),
    (0x114BE, 0x114BE, GraphemeBreak::SpacingMark),
    (0x114BF, 0x114C0, GraphemeBreak::Extend),
    (0x114C1, 0x114C1, GraphemeBreak::SpacingMark),
    (0x114C2, 0x114C3, GraphemeBreak::Extend),
    (0x115AF, 0x115AF, GraphemeBreak::Extend),
    (0x115B0, 0x115B1, GraphemeBreak::SpacingMark),
    (0x115B2, 0x115B5, GraphemeBreak::Extend),
    (0x115B8, 0x115BB, GraphemeBreak::SpacingMark),
    (0x115BC, 0x115BD, GraphemeBreak::Extend),
    (0x115BE, 0x115BE, GraphemeBreak::SpacingMark),
    (0x115BF, 0x115C0, GraphemeBreak::Extend),
    (0x115DC, 0x115DD, GraphemeBreak::Extend),
    (0x11630, 0x11632, GraphemeBreak::SpacingMark),
    (0x11633, 0x1163A, GraphemeBreak::Extend),
    (0x1163B, 0x1163C, GraphemeBreak::SpacingMark),
    (0x1163D, 0x1163D, GraphemeBreak::Extend),
    (0x1163E, 0x1163E, GraphemeBreak::SpacingMark),
    (0x1163F, 0x11640, GraphemeBreak::Extend),
    (0x116AB, 0x116AB, GraphemeBreak::Extend),
    (0x116AC, 0x116AC, GraphemeBreak::SpacingMark),
    (0x116AD, 0x116AD, GraphemeBreak::Extend),
    (0x116AE, 0x116AF, GraphemeBreak::SpacingMark),
    (0x116B0, 0x116B7, GraphemeBreak::Extend),
    (0x1171D, 0x1171D, GraphemeBreak::Extend),
    (0x1171E, 0x1171E, GraphemeBreak::SpacingMark),
    (0x1171F, 0x1171F, GraphemeBreak::Extend),
    (0x11722, 0x11725, GraphemeBreak::Extend),
    (0x11726, 0x11726, GraphemeBreak::SpacingMark),
    (0x11727, 0x1172B, GraphemeBreak::Extend),
    (0x1182C, 0x1182E, GraphemeBreak::SpacingMark),
    (0x1182F, 0x11837, GraphemeBreak::Extend),
    (0x11838, 0x11838, GraphemeBreak::SpacingMark),
    (0x11839, 0x1183A, GraphemeBreak::Extend),
    (0x11930, 0x11930, GraphemeBreak::Extend),
    (0x11931, 0x11935, GraphemeBreak::SpacingMark),
    (0x11937, 0x11938, GraphemeBreak::SpacingMark),
    (0x1193B, 0x1193E, GraphemeBreak::Extend),
    (0x1193F, 0x1193F, GraphemeBreak::Prepend),
    (0x11940, 0x11940, GraphemeBreak::SpacingMark),
    (0x11941, 0x11941, GraphemeBreak::Prepend),
    (0x11942, 0x11942, GraphemeBreak::SpacingMark),
    (0x11943, 0x11943, GraphemeBreak::Extend),
    (0x119D1, 0x119D3, GraphemeBreak::SpacingMark),
    (0x119D4, 0x119D7, GraphemeBreak::Extend),
    (0x119DA, 0x119DB, GraphemeBreak::Extend),
    (0x119DC, 0x119DF, GraphemeBreak::SpacingMark),
    (0x119E0, 0x119E0, GraphemeBreak::Extend),
    (0x119E4, 0x119E4, GraphemeBreak::SpacingMark),
    (0x11A01, 0x11A0A, GraphemeBreak::Extend),
    (0x11A33, 0x11A38, GraphemeBreak::Extend),
    (0x11A39, 0x11A39, GraphemeBreak::SpacingMark),
    (0x11A3B, 0x11A3E, GraphemeBreak::Extend),
    (0x11A47, 0x11A47, GraphemeBreak::Extend),
    (0x11A51, 0x11A56, GraphemeBreak::Extend),
    (0x11A57, 0x11A58, GraphemeBreak::SpacingMark),
    (0x11A59, 0x11A5B, GraphemeBreak::Extend),
    (0x11A84, 0x11A89, GraphemeBreak::Prepend),
    (0x11A8A, 0x11A96, GraphemeBreak::Extend),
    (0x11A97, 0x11A97, GraphemeBreak::SpacingMark),
    (0x11A98, 0x11A99, GraphemeBreak::Extend),
    (0x11B60, 0x11B60, GraphemeBreak::Extend),
    (0x11B61, 0x11B61, GraphemeBreak::SpacingMark),
    (0x11B62, 0x11B64, GraphemeBreak::Extend),
    (0x11B65, 0x11B65, GraphemeBreak::SpacingMark),
    (0x11B66, 0x11B66, GraphemeBreak::Extend),
    (0x11B67, 0x11B67, GraphemeBreak::SpacingMark),
    (0x11C2F, 0x11C2F, GraphemeBreak::SpacingMark),
    (0x11C30, 0x11C36, GraphemeBreak::Extend),
    (0x11C38, 0x11C3D, GraphemeBreak::Extend),
    (0x11C3E, 0x11C3E, GraphemeBreak::SpacingMark),
    (0x11C3F, 0x11C3F, GraphemeBreak::Extend),
    (0x11C92, 0x11CA7, GraphemeBreak::Extend),
    (0x11CA9, 0x11CA9, GraphemeBreak::SpacingMark),
    (0x11CAA, 0x11CB0, GraphemeBreak::Extend),
    (0x11CB1, 0x11CB1, GraphemeBreak::SpacingMark),
    (0x11CB2, 0x11CB3, GraphemeBreak::Extend),
    (0x11CB4, 0x11CB4, GraphemeBreak::SpacingMark),
    (0x11CB5, 0x11CB6, GraphemeBreak::Extend),
    (0x11D31, 0x11D36, GraphemeBreak::Extend),
    (0x11D3A, 0x11D3A, GraphemeBreak::Extend),
    (0x11D3C, 0x11D3D, GraphemeBreak::Extend),
    (0x11D3F, 0x11D45, GraphemeBreak::Extend),
    (0x11D46, 0x11D46, GraphemeBreak::Prepend),
    (0x11D47, 0x11D47, GraphemeBreak::Extend),
    (0x11D8A, 0x11D8E, GraphemeBreak::SpacingMark),
    (0x11D90, 0x11D91, GraphemeBreak::Extend),
    (0x11D93, 0x11D94, GraphemeBreak::SpacingMark),
    (0x11D95, 0x11D95, GraphemeBreak::Extend),
    (0x11D96, 0x11D96, GraphemeBreak::SpacingMark),
    (0x11D97, 0x11D97, GraphemeBreak::Extend),
    (0x11EF3, 0x11EF4, GraphemeBreak::Extend),
    (0x11EF5, 0x11EF6, GraphemeBreak::SpacingMark),
    (0x11F00, 0x11F01, GraphemeBreak::Extend),
    (0x11F02, 0x11F02, GraphemeBreak::Prepend),
    (0x11F03, 0x11F03, GraphemeBreak::SpacingMark),
    (0x11F34, 0x11F35, GraphemeBreak::SpacingMark),
    (0x11F36, 0x11F3A, GraphemeBreak::Extend),
    (0x11F3E, 0x11F3F, GraphemeBreak::SpacingMark),
    (0x11F40, 0x11F42, GraphemeBreak::Extend),
    (0x11F5A, 0x11F5A, GraphemeBreak::Extend),
    (0x13430, 0x1343F, GraphemeBreak::Control),
    (0x13440, 0x13440, GraphemeBreak::Extend),
    (0x13447, 0x13455, GraphemeBreak::Extend),
    (0x1611E, 0x16129, GraphemeBreak::Extend),
    (0x1612A, 0x1612C, GraphemeBreak::SpacingMark),
    (0x1612D, 0x1612F, GraphemeBreak::Extend),
    (0x16AF0, 0x16AF4, GraphemeBreak::Extend),
    (0x16B30, 0x16B36, GraphemeBreak::Extend),
    (0x16D63, 0x16D63, GraphemeBreak::V),
    (0x16D67, 0x16D6A, GraphemeBreak::V),
    (0x16F4F, 0x16F4F, GraphemeBreak::Extend),
    (0x16F51, 0x16F87, GraphemeBreak::SpacingMark),
    (0x16F8F, 0x16F92, GraphemeBreak::Extend),
    (0x16FE4, 0x16FE4, GraphemeBreak::Extend),
    (0x16FF0, 0x16FF1, GraphemeBreak::Extend),
    (0x1BC9D, 0x1BC9E, GraphemeBreak::Extend),
    (0x1BCA0, 0x1BCA3, GraphemeBreak::Control),
    (0x1CF00, 0x1CF2D, GraphemeBreak::Extend),
    (0x1CF30, 0x1CF46, GraphemeBreak::Extend),
    (0x1D165, 0x1D169, GraphemeBreak::Extend),
    (0x1D16D, 0x1D172, GraphemeBreak::Extend),
    (0x1D173, 0x1D17A, GraphemeBreak::Control),
    (0x1D17B, 0x1D182, GraphemeBreak::Extend),
    (0x1D185, 0x1D18B, GraphemeBreak::Extend),
    (0x1D1AA, 0x1D1AD, GraphemeBreak::Extend),
    (0x1D242, 0x1D244, GraphemeBreak::Extend),
    (0x1DA00, 0x1DA36, GraphemeBreak::Extend),
    (0x1DA3B, 0x1DA6C, GraphemeBreak::Extend),
    (0x1DA75, 0x1DA75, GraphemeBreak::Extend),
    (0x1DA84, 0x1DA84, GraphemeBreak::Extend),
    (0x1DA9B, 0x1DA9F, GraphemeBreak::Extend),
    (0x1DAA1, 0x1DAAF, GraphemeBreak::Extend),
    (0x1E000, 0x1E006, GraphemeBreak::Extend),
    (0x1E008, 0x1E018, GraphemeBreak::Extend),
    (0x1E01B, 0x1E021, GraphemeBreak::Extend),
    (0x1E023, 0x1E024, GraphemeBreak::Extend),
    (0x1E026, 0x1E02A, GraphemeBreak::Extend),
    (0x1E08F, 0x1E08F, GraphemeBreak::Extend),
    (0x1E130, 0x1E136, GraphemeBreak::Extend),
    (0x1E2AE, 0x1E2AE, GraphemeBreak::Extend),
    (0x1E2EC, 0x1E2EF, GraphemeBreak::Extend),
    (0x1E4EC, 0x1E4EF, GraphemeBreak::Extend),
    (0x1E5EE, 0x1E5EF, GraphemeBreak::Extend),
    (0x1E6E3, 0x1E6E3, GraphemeBreak::Extend),
    (0x1E6E6, 0x1E6E6, GraphemeBreak::Extend),
    (0x1E6EE, 0x1E6EF, GraphemeBreak::Extend),
    (0x1E6F5, 0x1E6F5, GraphemeBreak::Extend),
    (0x1E8D0, 0x1E8D6, GraphemeBreak::Extend),
    (0x1E944, 0x1E94A, GraphemeBreak::Extend),
    (0x1F1E6, 0x1F1FF, GraphemeBreak::RegionalIndicator),
    (0x1F3FB, 0x1F3FF, GraphemeBreak::Extend),
    (0xE0000, 0xE001F, GraphemeBreak::Control),
    (0xE0020, 0xE007F, GraphemeBreak::Extend),
    (0xE0080, 0xE00FF, GraphemeBreak::Control),
    (0xE0100, 0xE01EF, GraphemeBreak::Extend),
    (0xE01F0, 0xE0FFF, GraphemeBreak::Control),
];

/// `Extended_Pictographic` ranges, sorted and non-overlapping.
#[rustfmt::skip]
pub(crate) const EXTENDED_PICTOGRAPHIC: &[(u32, u32)] = &[
    (0x00A9, 0x00A9),
    (0x00AE, 0x00AE),
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    (0x2122, 0x2122),
    (0x2139, 0x2139),
    (0x2194, 0x2199),
    (0x21A9, 0x21AA),
    (0x231A, 0x231B),
    (0x2328, 0x2328),
    (0x2388, 0x2388),
    (0x23CF, 0x23CF),
    (0x23E9, 0x23F3),
    (0x23F8, 0x23FA),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25AB),
    (0x25B6, 0x25B6),
    (0x25C0, 0x25C0),
    (0x25FB, 0x25FE),
    (0x2600, 0x2605),
    (0x2607, 0x2612),
    (0x2614, 0x2685),
    (0x2690, 0x2705),
    (0x2708, 0x2712),
    (0x2714, 0x2714),
    (0x2716, 0x2716),
    (0x271D, 0x271D),
    (0x2721, 0x2721),
    (0x2728, 0x2728),
    (0x2733, 0x2734),
    (0x2744, 0x2744),
    (0x2747, 0x2747),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2763, 0x2767),
    (0x2795, 0x2797),
    (0x27A1, 0x27A1),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2934, 0x2935),
    (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x3297, 0x3297),
    (0x3299, 0x3299),
    (0x1F000, 0x1F0FF),
    (0x1F10D, 0x1F10F),
    (0x1F12F, 0x1F12F),
    (0x1F16C, 0x1F171),
    (0x1F17E, 0x1F17F),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F1AD, 0x1F1E5),
    (0x1F201, 0x1F20F),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F23A),
    (0x1F23C, 0x1F23F),
    (0x1F249, 0x1F3FA),
    (0x1F400, 0x1F53D),
    (0x1F546, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F774, 0x1F77F),
    (0x1F7D5, 0x1F7FF),
    (0x1F80C, 0x1F80F),
    (0x1F848, 0x1F84F),
    (0x1F85A, 0x1F85F),
    (0x1F888, 0x1F88F),
    (0x1F8AE, 0x1F8FF),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1FAFF),
    (0x1FC00, 0x1FFFD),
];

/// `Indic_Conjunct_Break` ranges, sorted and non-overlapping.
#[rustfmt::skip]
pub(crate) const INDIC_CONJUNCT_BREAK: &[(u32, u32, IndicConjunctBreak)] = &[
    (0x0300, 0x036F, IndicConjunctBreak::Extend),
    (0x0483, 0x0489, IndicConjunctBreak::Extend),
    (0x0591, 0x05BD, IndicConjunctBreak::Extend),
    (0x05BF, 0x05BF, IndicConjunctBreak::Extend),
    (0x05C1, 0x05C2, IndicConjunctBreak::Extend),
    (0x05C4, 0x05C5, IndicConjunctBreak::Extend),
    (0x05C7, 0x05C7, IndicConjunctBreak::Extend),
    (0x0610, 0x061A, IndicConjunctBreak::Extend),
    (0x064B, 0x065F, IndicConjunctBreak::Extend),
    (0x0670, 0x0670, IndicConjunctBreak::Extend),
    (0x06D6, 0x06DC, IndicConjunctBreak::Extend),
    (0x06DF, 0x06E4, IndicConjunctBreak::Extend),
    (0x06E7, 0x06E8, IndicConjunctBreak::Extend),
    (0x06EA, 0x06ED, IndicConjunctBreak::Extend),
    (0x0711, 0x0711, IndicConjunctBreak::Extend),
    (0x0730, 0x074A, IndicConjunctBreak::Extend),
    (0x07A6, 0x07B0, IndicConjunctBreak::Extend),
    (0x07EB, 0x07F3, IndicConjunctBreak::Extend),
    (0x07FD, 0x07FD, IndicConjunctBreak::Extend),
    (0x0816, 0x0819, IndicConjunctBreak::Extend),
    (0x081B, 0x0823, IndicConjunctBreak::Extend),
    (0x0825, 0x0827, IndicConjunctBreak::Extend),
    (0x0829, 0x082D, IndicConjunctBreak::Extend),
    (0x0859, 0x085B, IndicConjunctBreak::Extend),
    (0x0897, 0x089F, IndicConjunctBreak::Extend),
    (0x08CA, 0x08E1, IndicConjunctBreak::Extend),
    (0x08E3, 0x0902, IndicConjunctBreak::Extend),
    (0x0915, 0x0939, IndicConjunctBreak::Consonant),
    (0x093A, 0x093A, IndicConjunctBreak::Extend),
    (0x093C, 0x093C, IndicConjunctBreak::Extend),
    (0x0941, 0x0948, IndicConjunctBreak::Extend),
    (0x094D, 0x094D, IndicConjunctBreak::Linker),
    (0x0951, 0x0957, IndicConjunctBreak::Extend),
    (0x0958, 0x095F, IndicConjunctBreak::Consonant),
    (0x0962, 0x0963, IndicConjunctBreak::Extend),
    (0x0978, 0x097F, IndicConjunctBreak::Consonant),
    (0x0981, 0x0981, IndicConjunctBreak::Extend),
    (0x0995, 0x09A8, IndicConjunctBreak::Consonant),
    (0x09AA, 0x09B0, IndicConjunctBreak::Consonant),
    (0x09B2, 0x09B2, IndicConjunctBreak::Consonant),
    (0x09B6, 0x09B9, IndicConjunctBreak::Consonant),
    (0x09BC, 0x09BC, IndicConjunctBreak::Extend),
    (0x09BE, 0x09BE, IndicConjunctBreak::Extend),
    (0x09C1, 0x09C4, IndicConjunctBreak::Extend),
    (0x09CD, 0x09CD, IndicConjunctBreak::Linker),
    (0x09D7, 0x09D7, IndicConjunctBreak::Extend),
    (0x09DC, 0x09DD, IndicConjunctBreak::Consonant),
    (0x09DF, 0x09DF, IndicConjunctBreak::Consonant),
    (0x09E2, 0x09E3, IndicConjunctBreak::Extend),
    (0x09F0, 0x09F1, IndicConjunctBreak::Consonant),
    (0x09FE, 0x09FE, IndicConjunctBreak::Extend),
    (0x0A01, 0x0A02, IndicConjunctBreak::Extend),
    (0x0A3C, 0x0A3C, IndicConjunctBreak::Extend),
    (0x0A41, 0x0A42, IndicConjunctBreak::Extend),
    (0x0A47, 0x0A48, IndicConjunctBreak::Extend),
    (0x0A4B, 0x0A4D, IndicConjunctBreak::Extend),
    (0x0A51, 0x0A51, IndicConjunctBreak::Extend),
    (0x0A70, 0x0A71, IndicConjunctBreak::Extend),
    (0x0A75, 0x0A75, IndicConjunctBreak::Extend),
    (0x0A81, 0x0A82, IndicConjunctBreak::Extend),
    (0x0A95, 0x0AA8, IndicConjunctBreak::Consonant),
    (0x0AAA, 0x0AB0, IndicConjunctBreak::Consonant),
    (0x0AB2, 0x0AB3, IndicConjunctBreak::Consonant),
    (0x0AB5, 0x0AB9, IndicConjunctBreak::Consonant),
    (0x0ABC, 0x0ABC, IndicConjunctBreak::Extend),
    (0x0AC1, 0x0AC5, IndicConjunctBreak::Extend),
    (0x0AC7, 0x0AC8, IndicConjunctBreak::Extend),
    (0x0ACD, 0x0ACD, IndicConjunctBreak::Linker),
    (0x0AE2, 0x0AE3, IndicConjunctBreak::Extend),
    (0x0AF9, 0x0AF9, IndicConjunctBreak::Consonant),
    (0x0AFA, 0x0AFF, IndicConjunctBreak::Extend),
    (0x0B01, 0x0B01, IndicConjunctBreak::Extend),
    (0x0B15, 0x0B28, IndicConjunctBreak::Consonant),
    (0x0B2A, 0x0B30, IndicConjunctBreak::Consonant),
    (0x0B32, 0x0B33, IndicConjunctBreak::Consonant),
    (0x0B35, 0x0B39, IndicConjunctBreak::Consonant),
    (0x0B3C, 0x0B3C, IndicConjunctBreak::Extend),
    (0x0B3E, 0x0B3F, IndicConjunctBreak::Extend),
    (0x0B41, 0x0B44, IndicConjunctBreak::Extend),
    (0x0B4D, 0x0B4D, IndicConjunctBreak::Linker),
    (0x0B55, 0x0B57, IndicConjunctBreak::Extend),
    (0x0B5C, 0x0B5D, IndicConjunctBreak::Consonant),
    (0x0B5F, 0x0B5F, IndicConjunctBreak::Consonant),
    (0x0B62, 0x0B63, IndicConjunctBreak::Extend),
    (0x0B71, 0x0B71, IndicConjunctBreak::Consonant),
    (0x0B82, 0x0B82, IndicConjunctBreak::Extend),
    (0x0BBE, 0x0BBE, IndicConjunctBreak::Extend),
    (0x0BC0, 0x0BC0, IndicConjunctBreak::Extend),
    (0x0BCD, 0x0BCD, IndicConjunctBreak::Extend),
    (0x0BD7, 0x0BD7, IndicConjunctBreak::Extend),
    (0x0C00, 0x0C00, IndicConjunctBreak::Extend),
    (0x0C04, 0x0C04, IndicConjunctBreak::Extend),
    (0x0C15, 0x0C28, IndicConjunctBreak::Consonant),
    (0x0C2A, 0x0C39, IndicConjunctBreak::Consonant),
    (0x0C3C, 0x0C3C, IndicConjunctBreak::Extend),
    (0x0C3E, 0x0C40, IndicConjunctBreak::Extend),
    (0x0C46, 0x0C48, IndicConjunctBreak::Extend),
    (0x0C4A, 0x0C4C, IndicConjunctBreak::Extend),
    (0x0C4D, 0x0C4D, IndicConjunctBreak::Linker),
    (0x0C55, 0x0C56, IndicConjunctBreak::Extend),
    (0x0C58, 0x0C5A, IndicConjunctBreak::Consonant),
    (0x0C62, 0x0C63, IndicConjunctBreak::Extend),
    (0x0C81, 0x0C81, IndicConjunctBreak::Extend),
    (0x0CBC, 0x0CBC, IndicConjunctBreak::Extend),
    (0x0CBF, 0x0CC0, IndicConjunctBreak::Extend),
    (0x0CC2, 0x0CC2, IndicConjunctBreak::Extend),
    (0x0CC6, 0x0CC8, IndicConjunctBreak::Extend),
    (0x0CCA, 0x0CCD, IndicConjunctBreak::Extend),
    (0x0CD5, 0x0CD6, IndicConjunctBreak::Extend),
    (0x0CE2, 0x0CE3, IndicConjunctBreak::Extend),
    (0x0D00, 0x0D01, IndicConjunctBreak::Extend),
    (0x0D15, 0x0D3A, IndicConjunctBreak::Consonant),
    (0x0D3B, 0x0D3C, IndicConjunctBreak::Extend),
    (0x0D3E, 0x0D3E, IndicConjunctBreak::Extend),
    (0x0D41, 0x0D44, IndicConjunctBreak::Extend),
    (0x0D4D, 0x0D4D, IndicConjunctBreak::Linker),
    (0x0D57, 0x0D57, IndicConjunctBreak::Extend),
    (0x0D62, 0x0D63, IndicConjunctBreak::Extend),
    (0x0D81, 0x0D81, IndicConjunctBreak::Extend),
    (0x0DCA, 0x0DCA, IndicConjunctBreak::Extend),
    (0x0DCF, 0x0DCF, IndicConjunctBreak::Extend),
    (0x0DD2, 0x0DD4, IndicConjunctBreak::Extend),
    (0x0DD6, 0x0DD6, IndicConjunctBreak::Extend),
    (0x0DDF, 0x0DDF, IndicConjunctBreak::Extend),
    (0x0E31, 0x0E31, IndicConjunctBreak::Extend),
    (0x0E34, 0x0E3A, IndicConjunctBreak::Extend),
    (0x0E47, 0x0E4E, IndicConjunctBreak::Extend),
    (0x0EB1, 0x0EB1, IndicConjunctBreak::Extend),
    (0x0EB4, 0x0EBC, IndicConjunctBreak::Extend),
    (0x0EC8, 0x0ECE, IndicConjunctBreak::Extend),
    (0x0F18, 0x0F19, IndicConjunctBreak::Extend),
    (0x0F35, 0x0F35, IndicConjunctBreak::Extend),
    (0x0F37, 0x0F37, IndicConjunctBreak::Extend),
    (0x0F39, 0x0F39, IndicConjunctBreak::Extend),
    (0x0F71, 0x0F7E, IndicConjunctBreak::Extend),
    (0x0F80, 0x0F84, IndicConjunctBreak::Extend),
    (0x0F86, 0x0F87, IndicConjunctBreak::Extend),
    (0x0F8D, 0x0F97, IndicConjunctBreak::Extend),
    (0x0F99, 0x0FBC, IndicConjunctBreak::Extend),
    (0x0FC6, 0x0FC6, IndicConjunctBreak::Extend),
    (0x1000, 0x102A, IndicConjunctBreak::Consonant),
    (0x102D, 0x1030, IndicConjunctBreak::Extend),
    (0x1032, 0x1037, IndicConjunctBreak::Extend),
    (0x1039, 0x1039, IndicConjunctBreak::Linker),
    (0x103A, 0x103A, IndicConjunctBreak::Extend),
    (0x103D, 0x103E, IndicConjunctBreak::Extend),
    (0x103F, 0x103F, IndicConjunctBreak::Consonant),
    (0x1050, 0x1055, IndicConjunctBreak::Consonant),
    (0x1058, 0x1059, IndicConjunctBreak::Extend),
    (0x105A, 0x105D, IndicConjunctBreak::Consonant),
    (0x105E, 0x1060, IndicConjunctBreak::Extend),
    (0x1061, 0x1061, IndicConjunctBreak::Consonant),
    (0x1065, 0x1066, IndicConjunctBreak::Consonant),
    (0x106E, 0x1070, IndicConjunctBreak::Consonant),
    (0x1071, 0x1074, IndicConjunctBreak::Extend),
    (0x1075, 0x1081, IndicConjunctBreak::Consonant),
    (0x1082, 0x1082, IndicConjunctBreak::Extend),
    (0x1085, 0x1086, IndicConjunctBreak::Extend),
    (0x108D, 0x108D, IndicConjunctBreak::Extend),
    (0x108E, 0x108E, IndicConjunctBreak::Consonant),
    (0x109D, 0x109D, IndicConjunctBreak::Extend),
    (0x135D, 0x135F, IndicConjunctBreak::Extend),
    (0x1712, 0x1715, IndicConjunctBreak::Extend),
    (0x1732, 0x1734, IndicConjunctBreak::Extend),
    (0x1752, 0x1753, IndicConjunctBreak::Extend),
    (0x1772, 0x1773, IndicConjunctBreak::Extend),
    (0x1780, 0x17B3, IndicConjunctBreak::Consonant),
    (0x17B4, 0x17B5, IndicConjunctBreak::Extend),
    (0x17B7, 0x17BD, IndicConjunctBreak::Extend),
    (0x17C6, 0x17C6, IndicConjunctBreak::Extend),
    (0x17C9, 0x17D1, IndicConjunctBreak::Extend),
    (0x17D2, 0x17D2, IndicConjunctBreak::Linker),
    (0x17D3, 0x17D3, IndicConjunctBreak::Extend),
    (0x17DD, 0x17DD, IndicConjunctBreak::Extend),
    (0x180B, 0x180D, IndicConjunctBreak::Extend),
    (0x180F, 0x180F, IndicConjunctBreak::Extend),
    (0x1885, 0x1886, IndicConjunctBreak::Extend),
    (0x18A9, 0x18A9, IndicConjunctBreak::Extend),
    (0x1920, 0x1922, IndicConjunctBreak::Extend),
    (0x1927, 0x1928, IndicConjunctBreak::Extend),
    (0x1932, 0x1932, IndicConjunctBreak::Extend),
    (0x1939, 0x193B, IndicConjunctBreak::Extend),
    (0x1A17, 0x1A18, IndicConjunctBreak::Extend),
    (0x1A1B, 0x1A1B, IndicConjunctBreak::Extend),
    (0x1A20, 0x1A54, IndicConjunctBreak::Consonant),
    (0x1A56, 0x1A56, IndicConjunctBreak::Extend),
    (0x1A58, 0x1A5E, IndicConjunctBreak::Extend),
    (0x1A60, 0x1A60, IndicConjunctBreak::Linker),
    (0x1A62, 0x1A62, IndicConjunctBreak::Extend),
    (0x1A65, 0x1A6C, IndicConjunctBreak::Extend),
    (0x1A73, 0x1A7C, IndicConjunctBreak::Extend),
    (0x1A7F, 0x1A7F, IndicConjunctBreak::Extend),
    (0x1AB0, 0x1ADD, IndicConjunctBreak::Extend),
    (0x1AE0, 0x1AEB, IndicConjunctBreak::Extend),
    (0x1B00, 0x1B03, IndicConjunctBreak::Extend),
    (0x1B0B, 0x1B0C, IndicConjunctBreak::Consonant),
    (0x1B13, 0x1B33, IndicConjunctBreak::Consonant),
    (0x1B34, 0x1B3D, IndicConjunctBreak::Extend),
    (0x1B42, 0x1B43, IndicConjunctBreak::Extend),
    (0x1B44, 0x1B44, IndicConjunctBreak::Linker),
    (0x1B45, 0x1B4C, IndicConjunctBreak::Consonant),
    (0x1B6B, 0x1B73, IndicConjunctBreak::Extend),
    (0x1B80, 0x1B81, IndicConjunctBreak::Extend),
    (0x1B83, 0x1BA0, IndicConjunctBreak::Consonant),
    (0x1BA2, 0x1BA5, IndicConjunctBreak::Extend),
    (0x1BA8, 0x1BAA, IndicConjunctBreak::Extend),
    (0x1BAB, 0x1BAB, IndicConjunctBreak::Linker),
    (0x1BAC, 0x1BAD, IndicConjunctBreak::Extend),
    (0x1BAE, 0x1BAF, IndicConjunctBreak::Consonant),
    (0x1BBB, 0x1BBD, IndicConjunctBreak::Consonant),
    (0x1BE6, 0x1BE6, IndicConjunctBreak::Extend),
    (0x1BE8, 0x1BE9, IndicConjunctBreak::Extend),
    (0x1BED, 0x1BED, IndicConjunctBreak::Extend),
    (0x1BEF, 0x1BF3, IndicConjunctBreak::Extend),
    (0x1C2C, 0x1C33, IndicConjunctBreak::Extend),
    (0x1C36, 0x1C37, IndicConjunctBreak::Extend),
    (0x1CD0, 0x1CD2, IndicConjunctBreak::Extend),
    (0x1CD4, 0x1CE0, IndicConjunctBreak::Extend),
    (0x1CE2, 0x1CE8, IndicConjunctBreak::Extend),
    (0x1CED, 0x1CED, IndicConjunctBreak::Extend),
    (0x1CF4, 0x1CF4, IndicConjunctBreak::Extend),
    (0x1CF8, 0x1CF9, IndicConjunctBreak::Extend),
    (0x1DC0, 0x1DFF, IndicConjunctBreak::Extend),
    (0x200D, 0x200D, IndicConjunctBreak::Extend),
    (0x20D0, 0x20F0, IndicConjunctBreak::Extend),
    (0x2CEF, 0x2CF1, IndicConjunctBreak::Extend),
    (0x2D7F, 0x2D7F, IndicConjunctBreak::Extend),
    (0x2DE0, 0x2DFF, IndicConjunctBreak::Extend),
    (0x302A, 0x302F, IndicConjunctBreak::Extend),
    (0x3099, 0x309A, IndicConjunctBreak::Extend),
    (0xA66F, 0xA672, IndicConjunctBreak::Extend),
    (0xA674, 0xA67D, IndicConjunctBreak::Extend),
    (0xA69E, 0xA69F, IndicConjunctBreak::Extend),
    (0xA6F0, 0xA6F1, IndicConjunctBreak::Extend),
    (0xA802, 0xA802, IndicConjunctBreak::Extend),
    (0xA806, 0xA806, IndicConjunctBreak::Extend),
    (0xA80B, 0xA80B, IndicConjunctBreak::Extend),
    (0xA825, 0xA826, IndicConjunctBreak::Extend),
    (0xA82C, 0xA82C, IndicConjunctBreak::Extend),
    (0xA8C4, 0xA8C5, IndicConjunctBreak::Extend),
    (0xA8E0, 0xA8F1, IndicConjunctBreak::Extend),
    (0xA8FF, 0xA8FF, IndicConjunctBreak::Extend),
    (0xA926, 0xA92D, IndicConjunctBreak::Extend),
    (0xA947, 0xA951, IndicConjunctBreak::Extend),
    (0xA953, 0xA953, IndicConjunctBreak::Extend),
    (0xA980, 0xA982, IndicConjunctBreak::Extend),
    (0xA989, 0xA98B, IndicConjunctBreak::Consonant),
    (0xA98F, 0xA9B2, IndicConjunctBreak::Consonant),
    (0xA9B3, 0xA9B3, IndicConjunctBreak::Extend),
    (0xA9B6, 0xA9B9, IndicConjunctBreak::Extend),
    (0xA9BC, 0xA9BD, IndicConjunctBreak::Extend),
    (0xA9C0, 0xA9C0, IndicConjunctBreak::Linker),
    (0xA9E0, 0xA9E4, IndicConjunctBreak::Consonant),
    (0xA9E5, 0xA9E5, IndicConjunctBreak::Extend),
    (0xA9E7, 0xA9EF, IndicConjunctBreak::Consonant),
    (0xA9FA, 0xA9FE, IndicConjunctBreak::Consonant),
    (0xAA29, 0xAA2E, IndicConjunctBreak::Extend),
    (0xAA31, 0xAA32, IndicConjunctBreak::Extend),
    (0xAA35, 0xAA36, IndicConjunctBreak::Extend),
    (0xAA43, 0xAA43, IndicConjunctBreak::Extend),
    (0xAA4C, 0xAA4C, IndicConjunctBreak::Extend),
    (0xAA60, 0xAA6F, IndicConjunctBreak::Consonant),
    (0xAA71, 0xAA73, IndicConjunctBreak::Consonant),
    (0xAA7A, 0xAA7A, IndicConjunctBreak::Consonant),
    (0xAA7C, 0xAA7C, IndicConjunctBreak::Extend),
    (0xAA7E, 0xAA7F, IndicConjunctBreak::Consonant),
    (0xAAB0, 0xAAB0, IndicConjunctBreak::Extend),
    (0xAAB2, 0xAAB4, IndicConjunctBreak::Extend),
    (0xAAB7, 0xAAB8, IndicConjunctBreak::Extend),
    (0xAABE, 0xAABF, IndicConjunctBreak::Extend),
    (0xAAC1, 0xAAC1, IndicConjunctBreak::Extend),
    (0xAAE0, 0xAAEA, IndicConjunctBreak::Consonant),
    (0xAAEC, 0xAAED, IndicConjunctBreak::Extend),
    (0xAAF6, 0xAAF6, IndicConjunctBreak::Linker),
    (0xABC0, 0xABDA, IndicConjunctBreak::Consonant),
    (0xABE5, 0xABE5, IndicConjunctBreak::Extend),
    (0xABE8, 0xABE8, IndicConjunctBreak::Extend),
    (0xABED, 0xABED, IndicConjunctBreak::Extend),
    (0xFB1E, 0xFB1E, IndicConjunctBreak::Extend),
    (0xFE00, 0xFE0F, IndicConjunctBreak::Extend),
    (0xFE20, 0xFE2F, IndicConjunctBreak::Extend),
    (0xFF9E, 0xFF9F, IndicConjunctBreak::Extend),
    (0x101FD, 0x101FD, IndicConjunctBreak::Extend),
    (0x102E0, 0x102E0, IndicConjunctBreak::Extend),
    (0x10376, 0x1037A, IndicConjunctBreak::Extend),
    (0x10A00, 0x10A00, IndicConjunctBreak::Consonant),
    (0x10A01, 0x10A03, IndicConjunctBreak::Extend),
    (0x10A05, 0x10A06, IndicConjunctBreak::Extend),
    (0x10A0C, 0x10A0F, IndicConjunctBreak::Extend),
    (0x10A10, 0x10A13, IndicConjunctBreak::Consonant),
    (0x10A15, 0x10A17, IndicConjunctBreak::Consonant),
    (0x10A19, 0x10A35, IndicConjunctBreak::Consonant),
    (0x10A38, 0x10A3A, IndicConjunctBreak::Extend),
    (0x10A3F, 0x10A3F, IndicConjunctBreak::Linker),
    (0x10AE5, 0x10AE6, IndicConjunctBreak::Extend),
    (0x10D24, 0x10D27, IndicConjunctBreak::Extend),
    (0x10D69, 0x10D6D, IndicConjunctBreak::Extend),
    (0x10EAB, 0x10EAC, IndicConjunctBreak::Extend),
    (0x10EFA, 0x10EFF, IndicConjunctBreak::Extend),
    (0x10F46, 0x10F50, IndicConjunctBreak::Extend),
    (0x10F82, 0x10F85, IndicConjunctBreak::Extend),
    (0x11001, 0x11001, IndicConjunctBreak::Extend),
    (0x11038, 0x11046, IndicConjunctBreak::Extend),
    (0x11070, 0x11070, IndicConjunctBreak::Extend),
    (0x11073, 0x11074, IndicConjunctBreak::Extend),
    (0x1107F, 0x11081, IndicConjunctBreak::Extend),
    (0x110B3, 0x110B6, IndicConjunctBreak::Extend),
    (0x110B9, 0x110BA, IndicConjunctBreak::Extend),
    (0x110C2, 0x110C2, IndicConjunctBreak::Extend),
    (0x11100, 0x11102, IndicConjunctBreak::Extend),
    (0x11103, 0x11126, IndicConjunctBreak::Consonant),
    (0x11127, 0x1112B, IndicConjunctBreak::Extend),
    (0x1112D, 0x11132, IndicConjunctBreak::Extend),
    (0x11133, 0x11133, IndicConjunctBreak::Linker),
    (0x11134, 0x11134, IndicConjunctBreak::Extend),
    (0x11144, 0x11144, IndicConjunctBreak::Consonant),
    (0x11147, 0x11147, IndicConjunctBreak::Consonant),
    (0x11173, 0x11173, IndicConjunctBreak::Extend),
    (0x11180, 0x11181, IndicConjunctBreak::Extend),
    (0x111B6, 0x111BE, IndicConjunctBreak::Extend),
    (0x111C0, 0x111C0, IndicConjunctBreak::Extend),
    (0x111C9, 0x111CC, IndicConjunctBreak::Extend),
    (0x111CF, 0x111CF, IndicConjunctBreak::Extend),
    (0x1122F, 0x11231, IndicConjunctBreak::Extend),
    (0x11234, 0x11237, IndicConjunctBreak::Extend),
    (0x1123E, 0x1123E, IndicConjunctBreak::Extend),
    (0x11241, 0x11241, IndicConjunctBreak::Extend),
    (0x112DF, 0x112DF, IndicConjunctBreak::Extend),
    (0x112E3, 0x112EA, IndicConjunctBreak::Extend),
    (0x11300, 0x11301, IndicConjunctBreak::Extend),
    (0x1133B, 0x1133C, IndicConjunctBreak::Extend),
    (0x1133E, 0x1133E, IndicConjunctBreak::Extend),
    (0x11340, 0x11340, IndicConjunctBreak::Extend),
    (0x1134D, 0x1134D, IndicConjunctBreak::Extend),
    (0x11357, 0x11357, IndicConjunctBreak::Extend),
    (0x11366, 0x1136C, IndicConjunctBreak::Extend),
    (0x11370, 0x11374, IndicConjunctBreak::Extend),
    (0x11380, 0x11389, IndicConjunctBreak::Consonant),
    (0x1138B, 0x1138B, IndicConjunctBreak::Consonant),
    (0x1138E, 0x1138E, IndicConjunctBreak::Consonant),
    (0x11390, 0x113B5, IndicConjunctBreak::Consonant),
    (0x113B8, 0x113B8, IndicConjunctBreak::Extend),
    (0x113BB, 0x113C0, IndicConjunctBreak::Extend),
    (0x113C2, 0x113C2, IndicConjunctBreak::Extend),
    (0x113C5, 0x113C5, IndicConjunctBreak::Extend),
    (0x113C7, 0x113C9, IndicConjunctBreak::Extend),
    (0x113CE, 0x113CF, IndicConjunctBreak::Extend),
    (0x113D0, 0x113D0, IndicConjunctBreak::Linker),
    (0x113D2, 0x113D2, IndicConjunctBreak::Extend),
    (0x113E1, 0x113E2, IndicConjunctBreak::Extend),
    (0x11438, 0x1143F, IndicConjunctBreak::Extend),
    (0x11442, 0x11444, IndicConjunctBreak::Extend),
    (0x11446, 0x11446, IndicConjunctBreak::Extend),
    (0x1145E, 0x1145E, IndicConjunctBreak::Extend),
    (0x114B0, 0x114B0, IndicConjunctBreak::Extend),
    (0x114B3, 0x114B8, IndicConjunctBreak::Extend),
    (0x114BA, 0x114BA, IndicConjunctBreak::Extend),
    (0x114BD, 0x114BD, IndicConjunctBreak::Extend),
    (0x114BF, 0x114C0, IndicConjunctBreak::Extend),
    (0x114C2, 0x114C3, IndicConjunctBreak::Extend),
    (0x115AF, 0x115AF, IndicConjunctBreak::Extend),
    (0x115B2, 0x115B5, IndicConjunctBreak::Extend),
    (0x115BC, 0x115BD, IndicConjunctBreak::Extend),
    (0x115BF, 0x115C0, IndicConjunctBreak::Extend),
    (0x115DC, 0x115DD, IndicConjunctBreak::Extend),
    (0x11633, 0x1163A, IndicConjunctBreak::Extend),
    (0x1163D, 0x1163D, IndicConjunctBreak::Extend),
    (0x1163F, 0x11640, IndicConjunctBreak::Extend),
    (0x116AB, 0x116AB, IndicConjunctBreak::Extend),
    (0x116AD, 0x116AD, IndicConjunctBreak::Extend),
    (0x116B0, 0x116B7, IndicConjunctBreak::Extend),
    (0x1171D, 0x1171D, IndicConjunctBreak::Extend),
    (0x1171F, 0x1171F, IndicConjunctBreak::Extend),
    (0x11722, 0x11725, IndicConjunctBreak::Extend),
    (0x11727, 0x1172B, IndicConjunctBreak::Extend),
    (0x1182F, 0x11837, IndicConjunctBreak::Extend),
    (0x11839, 0x1183A, IndicConjunctBreak::Extend),
    (0x11900, 0x11906, IndicConjunctBreak::Consonant),
    (0x11909, 0x11909, IndicConjunctBreak::Consonant),
    (0x1190C, 0x11913, IndicConjunctBreak::Consonant),
    (0x11915, 0x11916, IndicConjunctBreak::Consonant),
    (0x11918, 0x1192F, IndicConjunctBreak::Consonant),
    (0x11930, 0x11930, IndicConjunctBreak::Extend),
    (0x1193B, 0x1193D, IndicConjunctBreak::Extend),
    (0x1193E, 0x1193E, IndicConjunctBreak::Linker),
    (0x11943, 0x11943, IndicConjunctBreak::Extend),
    (0x119D4, 0x119D7, IndicConjunctBreak::Extend),
    (0x119DA, 0x119DB, IndicConjunctBreak::Extend),
    (0x119E0, 0x119E0, IndicConjunctBreak::Extend),
    (0x11A00, 0x11A00, IndicConjunctBreak::Consonant),
    (0x11A01, 0x11A0A, IndicConjunctBreak::Extend),
    (0x11A0B, 0x11A32, IndicConjunctBreak::Consonant),
    (0x11A33, 0x11A38, IndicConjunctBreak::Extend),
    (0x11A3B, 0x11A3E, IndicConjunctBreak::Extend),
    (0x11A47, 0x11A47, IndicConjunctBreak::Linker),
    (0x11A50, 0x11A50, IndicConjunctBreak::Consonant),
    (0x11A51, 0x11A56, IndicConjunctBreak::Extend),
    (0x11A59, 0x11A5B, IndicConjunctBreak::Extend),
    (0x11A5C, 0x11A83, IndicConjunctBreak::Consonant),
    (0x11A8A, 0x11A96, IndicConjunctBreak::Extend),
    (0x11A98, 0x11A98, IndicConjunctBreak::Extend),
    (0x11A99, 0x11A99, IndicConjunctBreak::Linker),
    (0x11B60, 0x11B60, IndicConjunctBreak::Extend),
    (0x11B62, 0x11B64, IndicConjunctBreak::Extend),
    (0x11B66, 0x11B66, IndicConjunctBreak::Extend),
    (0x11C30, 0x11C36, IndicConjunctBreak::Extend),
    (0x11C38, 0x11C3D, IndicConjunctBreak::Extend),
    (0x11C3F, 0x11C3F, IndicConjunctBreak::Extend),
    (0x11C92, 0x11CA7, IndicConjunctBreak::Extend),
    (0x11CAA, 0x11CB0, IndicConjunctBreak::Extend),
    (0x11CB2, 0x11CB3, IndicConjunctBreak::Extend),
    (0x11CB5, 0x11CB6, IndicConjunctBreak::Extend),
    (0x11D31, 0x11D36, IndicConjunctBreak::Extend),
    (0x11D3A, 0x11D3A, IndicConjunctBreak::Extend),
    (0x11D3C, 0x11D3D, IndicConjunctBreak::Extend),
    (0x11D3F, 0x11D45, IndicConjunctBreak::Extend),
    (0x11D47, 0x11D47, IndicConjunctBreak::Extend),
    (0x11D90, 0x11D91, IndicConjunctBreak::Extend),
    (0x11D95, 0x11D95, IndicConjunctBreak::Extend),
    (0x11D97, 0x11D97, IndicConjunctBreak::Extend),
    (0x11EF3, 0x11EF4, IndicConjunctBreak::Extend),
    (0x11F00, 0x11F01, IndicConjunctBreak::Extend),
    (0x11F04, 0x11F10, IndicConjunctBreak::Consonant),
    (0x11F12, 0x11F33, IndicConjunctBreak::Consonant),
    (0x11F36, 0x11F3A, IndicConjunctBreak::Extend),
    (0x11F40, 0x11F41, IndicConjunctBreak::Extend),
    (0x11F42, 0x11F42, IndicConjunctBreak::Linker),
    (0x11F5A, 0x11F5A, IndicConjunctBreak::Extend),
    (0x13440, 0x13440, IndicConjunctBreak::Extend),
    (0x13447, 0x13455, IndicConjunctBreak::Extend),
    (0x1611E, 0x16129, IndicConjunctBreak::Extend),
    (0x1612D, 0x1612F, IndicConjunctBreak::Extend),
    (0x16AF0, 0x16AF4, IndicConjunctBreak::Extend),
    (0x16B30, 0x16B36, IndicConjunctBreak::Extend),
    (0x16F4F, 0x16F4F, IndicConjunctBreak::Extend),
    (0x16F8F, 0x16F92, IndicConjunctBreak::Extend),
    (0x16FE4, 0x16FE4, IndicConjunctBreak::Extend),
    (0x16FF0, 0x16FF1, IndicConjunctBreak::Extend),
    (0x1BC9D, 0x1BC9E, IndicConjunctBreak::Extend),
    (0x1CF00, 0x1CF2D, IndicConjunctBreak::Extend),
    (0x1CF30, 0x1CF46, IndicConjunctBreak::Extend),
    (0x1D165, 0x1D169, IndicConjunctBreak::Extend),
    (0x1D16D, 0x1D172, IndicConjunctBreak::Extend),
    (0x1D17B, 0x1D182, IndicConjunctBreak::Extend),
    (0x1D185, 0x1D18B, IndicConjunctBreak::Extend),
    (0x1D1AA, 0x1D1AD, IndicConjunctBreak::Extend),
    (0x1D242, 0x1D244, IndicConjunctBreak::Extend),
    (0x1DA00, 0x1DA36, IndicConjunctBreak::Extend),
    (0x1DA3B, 0x1DA6C, IndicConjunctBreak::Extend),
    (0x1DA75, 0x1DA75, IndicConjunctBreak::Extend),
    (0x1DA84, 0x1DA84, IndicConjunctBreak::Extend),
    (0x1DA9B, 0x1DA9F, IndicConjunctBreak::Extend),
    (0x1DAA1, 0x1DAAF, IndicConjunctBreak::Extend),
    (0x1E000, 0x1E006, IndicConjunctBreak::Extend),
    (0x1E008, 0x1E018, IndicConjunctBreak::Extend),
    (0x1E01B, 0x1E021, IndicConjunctBreak::Extend),
    (0x1E023, 0x1E024, IndicConjunctBreak::Extend),
    (0x1E026, 0x1E02A, IndicConjunctBreak::Extend),
    (0x1E08F, 0x1E08F, IndicConjunctBreak::Extend),
    (0x1E130, 0x1E136, IndicConjunctBreak::Extend),
    (0x1E2AE, 0x1E2AE, IndicConjunctBreak::Extend),
    (0x1E2EC, 0x1E2EF, IndicConjunctBreak::Extend),
    (0x1E4EC, 0x1E4EF, IndicConjunctBreak::Extend),
    (0x1E5EE, 0x1E5EF, IndicConjunctBreak::Extend),
    (0x1E6E3, 0x1E6E3, IndicConjunctBreak::Extend),
    (0x1E6E6, 0x1E6E6, IndicConjunctBreak::Extend),
    (0x1E6EE, 0x1E6EF, IndicConjunctBreak::Extend),
    (0x1E6F5, 0x1E6F5, IndicConjunctBreak::Extend),
    (0x1E8D0, 0x1E8D6, IndicConjunctBreak::Extend),
    (0x1E944, 0x1E94A, IndicConjunctBreak::Extend),
    (0x1F3FB, 0x1F3FF, IndicConjunctBreak::Extend),
    (0xE0020, 0xE007F, IndicConjunctBreak::Extend),
    (0xE0100, 0xE01EF, IndicConjunctBreak::Extend),
];

/// General_Category `P*` (Pc, Pd, Ps, Pe, Pi, Pf, Po) ranges, sorted and non-overlapping.
#[rustfmt::skip]
pub(crate) const PUNCTUATION: &[(u32, u32)] = &[
    (0x0021, 0x0023),
    (0x0025, 0x002A),
    (0x002C, 0x002F),
    (0x003A, 0x003B),
    (0x003F, 0x0040),
    (0x005B, 0x005D),
    (0x005F, 0x005F),
    (0x007B, 0x007B),
    (0x007D, 0x007D),
    (0x00A1, 0x00A1),
    (0x00A7, 0x00A7),
    (0x00AB, 0x00AB),
    (0x00B6, 0x00B7),
    (0x00BB, 0x00BB),
    (0x00BF, 0x00BF),
    (0x037E, 0x037E),
    (0x0387, 0x0387),
    (0x055A, 0x055F),
    (0x0589, 0x058A),
    (0x05BE, 0x05BE),
    (0x05C0, 0x05C0),
    (0x05C3, 0x05C3),
    (0x05C6, 0x05C6),
    (0x05F3, 0x05F4),
    (0x0609, 0x060A),
    (0x060C, 0x060D),
    (0x061B, 0x061B),
    (0x061D, 0x061F),
    (0x066A, 0x066D),
    (0x06D4, 0x06D4),
    (0x0700, 0x070D),
    (0x07F7, 0x07F9),
    (0x0830, 0x083E),
    (0x085E, 0x085E),
    (0x0964, 0x0965),
    (0x0970, 0x0970),
    (0x09FD, 0x09FD),
    (0x0A76, 0x0A76),
    (0x0AF0, 0x0AF0),
    (0x0C77, 0x0C77),
    (0x0C84, 0x0C84),
    (0x0DF4, 0x0DF4),
    (0x0E4F, 0x0E4F),
    (0x0E5A, 0x0E5B),
    (0x0F04, 0x0F12),
    (0x0F14, 0x0F14),
    (0x0F3A, 0x0F3D),
    (0x0F85, 0x0F85),
    (0x0FD0, 0x0FD4),
    (0x0FD9, 0x0FDA),
    (0x104A, 0x104F),
    (0x10FB, 0x10FB),
    (0x1360, 0x1368),
    (0x1400, 0x1400),
    (0x166E, 0x166E),
    (0x169B, 0x169C),
    (0x16EB, 0x16ED),
    (0x1735, 0x1736),
    (0x17D4, 0x17D6),
    (0x17D8, 0x17DA),
    (0x1800, 0x180A),
    (0x1944, 0x1945),
    (0x1A1E, 0x1A1F),
    (0x1AA0, 0x1AA6),
    (0x1AA8, 0x1AAD),
    (0x1B5A, 0x1B60),
    (0x1B7D, 0x1B7E),
    (0x1BFC, 0x1BFF),
    (0x1C3B, 0x1C3F),
    (0x1C7E, 0x1C7F),
    (0x1CC0, 0x1CC7),
    (0x1CD3, 0x1CD3),
    (0x2010, 0x2027),
    (0x2030, 0x2043),
    (0x2045, 0x2051),
    (0x2053, 0x205E),
    (0x207D, 0x207E),
    (0x208D, 0x208E),
    (0x2308, 0x230B),
    (0x2329, 0x232A),
    (0x2768, 0x2775),
    (0x27C5, 0x27C6),
    (0x27E6, 0x27EF),
    (0x2983, 0x2998),
    (0x29D8, 0x29DB),
    (0x29FC, 0x29FD),
    (0x2CF9, 0x2CFC),
    (0x2CFE, 0x2CFF),
    (0x2D70, 0x2D70),
    (0x2E00, 0x2E2E),
    (0x2E30, 0x2E4F),
    (0x2E52, 0x2E5D),
    (0x3001, 0x3003),
    (0x3008, 0x3011),
    (0x3014, 0x301F),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x30A0, 0x30A0),
    (0x30FB, 0x30FB),
    (0xA4FE, 0xA4FF),
    (0xA60D, 0xA60F),
    (0xA673, 0xA673),
    (0xA67E, 0xA67E),
    (0xA6F2, 0xA6F7),
    (0xA874, 0xA877),
    (0xA8CE, 0xA8CF),
    (0xA8F8, 0xA8FA),
    (0xA8FC, 0xA8FC),
    (0xA92E, 0xA92F),
    (0xA95F, 0xA95F),
    (0xA9C1, 0xA9CD),
    (0xA9DE, 0xA9DF),
    (0xAA5C, 0xAA5F),
    (0xAADE, 0xAADF),
    (0xAAF0, 0xAAF1),
    (0xABEB, 0xABEB),
    (0xFD3E, 0xFD3F),
    (0xFE10, 0xFE19),
    (0xFE30, 0xFE52),
    (0xFE54, 0xFE61),
    (0xFE63, 0xFE63),
    (0xFE68, 0xFE68),
    (0xFE6A, 0xFE6B),
    (0xFF01, 0xFF03),
    (0xFF05, 0xFF0A),
    (0xFF0C, 0xFF0F),
    (0xFF1A, 0xFF1B),
    (0xFF1F, 0xFF20),
    (0xFF3B, 0xFF3D),
    (0xFF3F, 0xFF3F),
    (0xFF5B, 0xFF5B),
    (0xFF5D, 0xFF5D),
    (0xFF5F, 0xFF65),
    (0x10100, 0x10102),
    (0x1039F, 0x1039F),
    (0x103D0, 0x103D0),
    (0x1056F, 0x1056F),
    (0x10857, 0x10857),
    (0x1091F, 0x1091F),
    (0x1093F, 0x1093F),
    (0x10A50, 0x10A58),
    (0x10A7F, 0x10A7F),
    (0x10AF0, 0x10AF6),
    (0x10B39, 0x10B3F),
    (0x10B99, 0x10B9C),
    (0x10EAD, 0x10EAD),
    (0x10F55, 0x10F59),
    (0x10F86, 0x10F89),
    (0x11047, 0x1104D),
    (0x110BB, 0x110BC),
    (0x110BE, 0x110C1),
    (0x11140, 0x11143),
    (0x11174, 0x11175),
    (0x111C5, 0x111C8),
    (0x111CD, 0x111CD),
    (0x111DB, 0x111DB),
    (0x111DD, 0x111DF),
    (0x11238, 0x1123D),
    (0x112A9, 0x112A9),
    (0x1144B, 0x1144F),
    (0x1145A, 0x1145B),
    (0x1145D, 0x1145D),
    (0x114C6, 0x114C6),
    (0x115C1, 0x115D7),
    (0x11641, 0x11643),
    (0x11660, 0x1166C),
    (0x116B9, 0x116B9),
    (0x1173C, 0x1173E),
    (0x1183B, 0x1183B),
    (0x11944, 0x11946),
    (0x119E2, 0x119E2),
    (0x11A3F, 0x11A46),
    (0x11A9A, 0x11A9C),
    (0x11A9E, 0x11AA2),
    (0x11C41, 0x11C45),
    (0x11C70, 0x11C71),
    (0x11EF7, 0x11EF8),
    (0x11FFF, 0x11FFF),
    (0x12470, 0x12474),
    (0x12FF1, 0x12FF2),
    (0x16A6E, 0x16A6F),
    (0x16AF5, 0x16AF5),
    (0x16B37, 0x16B3B),
    (0x16B44, 0x16B44),
    (0x16E97, 0x16E9A),
    (0x16FE2, 0x16FE2),
    (0x1BC9F, 0x1BC9F),
    (0x1DA87, 0x1DA8B),
    (0x1E95E, 0x1E95F),
];
