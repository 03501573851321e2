use std::ops::RangeInclusive;

// CJK Unified Ideographs (common kanji block)
pub const COMMON_KANJI_RANGE: RangeInclusive<u32> = 0x4e00..=0x9faf;
// CJK Unified Ideographs Extension A
pub const KANJI_EXTENDED_A_RANGE: RangeInclusive<u32> = 0x3400..=0x4dbf;

pub const GLOSSABLE_RANGES: [RangeInclusive<u32>; 2] = [COMMON_KANJI_RANGE, KANJI_EXTENDED_A_RANGE];

/// Whether `ch` is an ideograph that may carry a ruby gloss.
pub fn is_glossable(ch: char) -> bool {
    let c = ch as u32;

    GLOSSABLE_RANGES.iter().any(|range| range.contains(&c))
}
