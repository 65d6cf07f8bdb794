//! Arabic codepoint tables used by segmentation and classification.

pub const TANWEEN_FATH: char = '\u{064B}';
pub const TANWEEN_DAMM: char = '\u{064C}';
pub const TANWEEN_KASR: char = '\u{064D}';
pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';
pub const MADDAH: char = '\u{0653}';
/// Superscript (small) alef. Not a diacritic for grouping purposes.
pub const SMALL_ALEF: char = '\u{0670}';

pub const ALEF: char = '\u{0627}';
pub const ALEF_MADDA: char = '\u{0622}';
pub const ALEF_HAMZA_ABOVE: char = '\u{0623}';
pub const ALEF_HAMZA_BELOW: char = '\u{0625}';
pub const ALEF_MAQSURA: char = '\u{0649}';
pub const WAW: char = '\u{0648}';
pub const WAW_HAMZA: char = '\u{0624}';
pub const YEH: char = '\u{064A}';
pub const YEH_HAMZA: char = '\u{0626}';
pub const BEH: char = '\u{0628}';
pub const NOON: char = '\u{0646}';
pub const MEEM: char = '\u{0645}';

/// Combining marks that attach to the preceding base character.
pub const DIACRITICS: &[char] = &[
    TANWEEN_FATH,
    TANWEEN_DAMM,
    TANWEEN_KASR,
    FATHA,
    DAMMA,
    KASRA,
    SHADDA,
    SUKUN,
    MADDAH,
    '\u{0654}', // Hamza above
    '\u{0655}', // Hamza below
    '\u{0656}', // Subscript alef
    '\u{0657}', // Inverted damma
    '\u{0658}', // Mark noon ghunna
];

pub const TANWEEN: &[char] = &[TANWEEN_FATH, TANWEEN_DAMM, TANWEEN_KASR];

/// Letters that can carry elongation.
pub const MAD_LETTERS: &[char] = &[
    ALEF,
    WAW,
    YEH,
    ALEF_MAQSURA,
    ALEF_MADDA,
    ALEF_HAMZA_ABOVE,
    ALEF_HAMZA_BELOW,
    WAW_HAMZA,
    YEH_HAMZA,
];

pub const ALEF_FAMILY: &[char] = &[ALEF, ALEF_MADDA, ALEF_HAMZA_ABOVE, ALEF_HAMZA_BELOW];

pub const YEH_FAMILY: &[char] = &[YEH, ALEF_MAQSURA];

/// خ ص ض غ ط ق ظ
pub const TAFKHEEM_LETTERS: &[char] = &[
    '\u{062E}', '\u{0635}', '\u{0636}', '\u{063A}', '\u{0637}', '\u{0642}', '\u{0638}',
];

/// ق ط ب ج د
pub const QALQALAH_LETTERS: &[char] = &['\u{0642}', '\u{0637}', BEH, '\u{062C}', '\u{062F}'];

pub const GHUNNAH_LETTERS: &[char] = &[NOON, MEEM];

/// ت ث ج د ذ ز س ش ص ض ط ظ ف ق ك
pub const IKHFA_LETTERS: &[char] = &[
    '\u{062A}', '\u{062B}', '\u{062C}', '\u{062F}', '\u{0630}', '\u{0632}', '\u{0633}',
    '\u{0634}', '\u{0635}', '\u{0636}', '\u{0637}', '\u{0638}', '\u{0641}', '\u{0642}',
    '\u{0643}',
];

/// ي ر م ل و
pub const IDGHAAM_LETTERS: &[char] = &[YEH, '\u{0631}', MEEM, '\u{0644}', WAW];

#[inline]
pub fn is_diacritic(ch: char) -> bool {
    DIACRITICS.contains(&ch)
}

#[inline]
pub fn is_tanween(ch: char) -> bool {
    TANWEEN.contains(&ch)
}
