//! Rule classifier.
//!
//! # Responsibility
//! - Assign exactly one `TajweedRule` to every atomic unit.
//!
//! # Invariants
//! - Predicates are evaluated in `CLASSIFICATION_TABLE` order and every match
//!   overwrites the previous result; the last match wins.
//! - The "next letter" is the base of the next unit that has one; base-less
//!   diacritic runs are skipped, spaces and punctuation are not.
//! - The "previous character" is the last codepoint of the preceding unit.
//!
//! The table order reproduces a fixed reference behavior (for example
//! idghaam is checked after ikhfa and iqlab). Changing it changes output for
//! real verses; keep it as is until the precedence is reviewed against a
//! Tajweed authority.

use crate::model::rule::TajweedRule;
use crate::text::grapheme::AtomicUnit;
use crate::text::letters::{
    ALEF_FAMILY, BEH, DAMMA, FATHA, GHUNNAH_LETTERS, IDGHAAM_LETTERS, IKHFA_LETTERS, KASRA,
    MADDAH, MAD_LETTERS, NOON, QALQALAH_LETTERS, SHADDA, SMALL_ALEF, SUKUN, TAFKHEEM_LETTERS,
    WAW, YEH_FAMILY,
};

/// Neighbourhood of one unit as seen by rule predicates.
struct UnitContext<'u, 'a> {
    unit: &'u AtomicUnit<'a>,
    next_letter: Option<char>,
    previous_char: Option<char>,
}

impl UnitContext<'_, '_> {
    fn base_in(&self, letters: &[char]) -> bool {
        self.unit.base().is_some_and(|base| letters.contains(&base))
    }

    fn next_in(&self, letters: &[char]) -> bool {
        self.next_letter
            .is_some_and(|next| letters.contains(&next))
    }

    fn is_noon_with_sukun(&self) -> bool {
        self.unit.base() == Some(NOON) && self.unit.has_mark(SUKUN)
    }
}

type RulePredicate = fn(&UnitContext<'_, '_>) -> bool;

const CLASSIFICATION_TABLE: [(TajweedRule, RulePredicate); 8] = [
    (TajweedRule::Mad, is_mad),
    (TajweedRule::Tafkheem, is_tafkheem),
    (TajweedRule::Qalqalah, is_qalqalah),
    (TajweedRule::Ghunnah, is_ghunnah),
    (TajweedRule::Ikhfa, is_ikhfa),
    (TajweedRule::Iqlab, is_iqlab),
    (TajweedRule::Silent, is_silent),
    (TajweedRule::Idghaam, is_idghaam),
];

/// Returns the rules the classifier can assign, in evaluation order.
///
/// `Normal` is the implicit default and is not listed.
pub fn classification_order() -> [TajweedRule; 8] {
    CLASSIFICATION_TABLE.map(|(rule, _)| rule)
}

/// Classifies every unit; the output is index-aligned with `units`.
pub(crate) fn classify_units(units: &[AtomicUnit<'_>]) -> Vec<TajweedRule> {
    let next_letters = next_significant_letters(units);

    units
        .iter()
        .enumerate()
        .map(|(index, unit)| {
            let context = UnitContext {
                unit,
                next_letter: next_letters[index],
                previous_char: index
                    .checked_sub(1)
                    .and_then(|previous| units[previous].last_char()),
            };
            classify(&context)
        })
        .collect()
}

fn classify(context: &UnitContext<'_, '_>) -> TajweedRule {
    CLASSIFICATION_TABLE
        .iter()
        .fold(TajweedRule::Normal, |current, (rule, predicate)| {
            if predicate(context) {
                *rule
            } else {
                current
            }
        })
}

/// For each unit, the base of the closest following unit that has one.
fn next_significant_letters(units: &[AtomicUnit<'_>]) -> Vec<Option<char>> {
    let mut next_letters = vec![None; units.len()];
    let mut upcoming = None;
    for (index, unit) in units.iter().enumerate().rev() {
        next_letters[index] = upcoming;
        if let Some(base) = unit.base() {
            upcoming = Some(base);
        }
    }
    next_letters
}

fn is_mad(context: &UnitContext<'_, '_>) -> bool {
    let Some(base) = context.unit.base() else {
        return false;
    };
    if !MAD_LETTERS.contains(&base) {
        return false;
    }

    let previous = context.previous_char;
    context.unit.has_mark(MADDAH)
        || (ALEF_FAMILY.contains(&base) && previous == Some(FATHA))
        || (base == WAW && previous == Some(DAMMA))
        || (YEH_FAMILY.contains(&base) && previous == Some(KASRA))
}

fn is_tafkheem(context: &UnitContext<'_, '_>) -> bool {
    context.base_in(TAFKHEEM_LETTERS)
}

fn is_qalqalah(context: &UnitContext<'_, '_>) -> bool {
    context.base_in(QALQALAH_LETTERS) && context.unit.has_mark(SUKUN)
}

fn is_ghunnah(context: &UnitContext<'_, '_>) -> bool {
    if !context.base_in(GHUNNAH_LETTERS) {
        return false;
    }
    context.unit.has_mark(SHADDA)
        || context.next_letter == context.unit.base()
        || context.unit.has_tanween()
}

fn is_ikhfa(context: &UnitContext<'_, '_>) -> bool {
    context.is_noon_with_sukun() && context.next_in(IKHFA_LETTERS)
}

fn is_iqlab(context: &UnitContext<'_, '_>) -> bool {
    (context.is_noon_with_sukun() || context.unit.has_tanween())
        && context.next_letter == Some(BEH)
}

fn is_silent(context: &UnitContext<'_, '_>) -> bool {
    context.unit.contains(SMALL_ALEF)
}

fn is_idghaam(context: &UnitContext<'_, '_>) -> bool {
    context.is_noon_with_sukun() && context.next_in(IDGHAAM_LETTERS)
}

#[cfg(test)]
mod tests {
    use super::{classification_order, classify_units};
    use crate::model::rule::TajweedRule;
    use crate::text::grapheme::segment_units;

    fn rules_of(text: &str) -> Vec<TajweedRule> {
        classify_units(&segment_units(text))
    }

    #[test]
    fn evaluation_order_is_stable() {
        assert_eq!(
            classification_order(),
            [
                TajweedRule::Mad,
                TajweedRule::Tafkheem,
                TajweedRule::Qalqalah,
                TajweedRule::Ghunnah,
                TajweedRule::Ikhfa,
                TajweedRule::Iqlab,
                TajweedRule::Silent,
                TajweedRule::Idghaam,
            ]
        );
    }

    #[test]
    fn plain_letter_is_normal() {
        assert_eq!(rules_of("\u{0633}"), vec![TajweedRule::Normal]);
    }

    #[test]
    fn alef_after_fatha_is_mad() {
        // بَا
        assert_eq!(
            rules_of("\u{0628}\u{064E}\u{0627}"),
            vec![TajweedRule::Normal, TajweedRule::Mad]
        );
    }

    #[test]
    fn waw_after_damma_and_yeh_after_kasra_are_mad() {
        // سُو
        assert_eq!(
            rules_of("\u{0633}\u{064F}\u{0648}")[1],
            TajweedRule::Mad
        );
        // سِي
        assert_eq!(
            rules_of("\u{0633}\u{0650}\u{064A}")[1],
            TajweedRule::Mad
        );
        // سِى
        assert_eq!(
            rules_of("\u{0633}\u{0650}\u{0649}")[1],
            TajweedRule::Mad
        );
    }

    #[test]
    fn waw_after_fatha_is_not_mad() {
        // سَو
        assert_eq!(
            rules_of("\u{0633}\u{064E}\u{0648}")[1],
            TajweedRule::Normal
        );
    }

    #[test]
    fn maddah_mark_is_mad_without_vowel_context() {
        // آ is a base letter; ا + U+0653 carries the mark explicitly.
        assert_eq!(rules_of("\u{0627}\u{0653}"), vec![TajweedRule::Mad]);
        assert_eq!(rules_of("\u{0622}"), vec![TajweedRule::Normal]);
    }

    #[test]
    fn mad_only_sees_the_immediately_preceding_codepoint() {
        // بَّا: shadda follows fatha, so the alef does not see the fatha.
        assert_eq!(
            rules_of("\u{0628}\u{064E}\u{0651}\u{0627}")[1],
            TajweedRule::Normal
        );
    }

    #[test]
    fn tafkheem_ignores_diacritics() {
        assert_eq!(rules_of("\u{0637}"), vec![TajweedRule::Tafkheem]);
        assert_eq!(rules_of("\u{0635}\u{064E}"), vec![TajweedRule::Tafkheem]);
    }

    #[test]
    fn qalqalah_overrides_tafkheem() {
        // قْ
        assert_eq!(rules_of("\u{0642}\u{0652}"), vec![TajweedRule::Qalqalah]);
        // دْ
        assert_eq!(rules_of("\u{062F}\u{0652}"), vec![TajweedRule::Qalqalah]);
    }

    #[test]
    fn ghunnah_on_shadda_tanween_or_doubled_letter() {
        assert_eq!(rules_of("\u{0646}\u{0651}"), vec![TajweedRule::Ghunnah]);
        assert_eq!(rules_of("\u{0645}\u{064C}"), vec![TajweedRule::Ghunnah]);
        // مْم
        assert_eq!(
            rules_of("\u{0645}\u{0652}\u{0645}")[0],
            TajweedRule::Ghunnah
        );
    }

    #[test]
    fn ikhfa_before_hidden_letters() {
        // نْت
        assert_eq!(
            rules_of("\u{0646}\u{0652}\u{062A}"),
            vec![TajweedRule::Ikhfa, TajweedRule::Normal]
        );
    }

    #[test]
    fn ikhfa_lookahead_does_not_cross_spaces() {
        // Repeated marks stay on the noon unit.
        assert_eq!(
            rules_of("\u{0646}\u{0652}\u{0652}\u{062A}")[0],
            TajweedRule::Ikhfa
        );
        // نْ + space + ت
        assert_eq!(
            rules_of("\u{0646}\u{0652} \u{062A}")[0],
            TajweedRule::Normal
        );
    }

    #[test]
    fn iqlab_on_noon_sukun_or_tanween_before_beh() {
        assert_eq!(
            rules_of("\u{0646}\u{0652}\u{0628}")[0],
            TajweedRule::Iqlab
        );
        // سٌب
        assert_eq!(
            rules_of("\u{0633}\u{064C}\u{0628}")[0],
            TajweedRule::Iqlab
        );
    }

    #[test]
    fn tanween_meem_before_beh_prefers_iqlab_over_ghunnah() {
        assert_eq!(
            rules_of("\u{0645}\u{064B}\u{0628}")[0],
            TajweedRule::Iqlab
        );
    }

    #[test]
    fn small_alef_is_silent() {
        // مَٰ
        assert_eq!(
            rules_of("\u{0645}\u{064E}\u{0670}"),
            vec![TajweedRule::Normal, TajweedRule::Silent]
        );
    }

    #[test]
    fn idghaam_before_merging_letters() {
        for next in ['\u{064A}', '\u{0631}', '\u{0645}', '\u{0644}', '\u{0648}'] {
            let text = format!("\u{0646}\u{0652}{next}");
            assert_eq!(rules_of(&text)[0], TajweedRule::Idghaam, "next={next}");
        }
    }

    #[test]
    fn noon_without_sukun_before_beh_stays_normal() {
        // نَب
        assert_eq!(
            rules_of("\u{0646}\u{064E}\u{0628}")[0],
            TajweedRule::Normal
        );
    }

    #[test]
    fn baseless_marks_pass_through_as_normal() {
        assert_eq!(
            rules_of("\u{064E}\u{0650}"),
            vec![TajweedRule::Normal]
        );
    }

    #[test]
    fn classification_is_index_aligned_with_units() {
        let text = "بِسْمِ اللَّهِ الرَّحْمَٰنِ";
        assert_eq!(rules_of(text).len(), segment_units(text).len());
    }

    #[test]
    fn later_rules_override_earlier_matches() {
        let cases = [
            // Small alef carrying tanween before ba: iqlab, then silent.
            ("\u{0670}\u{064C}\u{0628}", vec![TajweedRule::Silent, TajweedRule::Normal]),
            // نّْت: ghunnah on shadda, then ikhfa.
            (
                "\u{0646}\u{0651}\u{0652}\u{062A}",
                vec![TajweedRule::Ikhfa, TajweedRule::Normal],
            ),
            // نّْم: ghunnah on shadda, then idghaam.
            (
                "\u{0646}\u{0651}\u{0652}\u{0645}",
                vec![TajweedRule::Idghaam, TajweedRule::Normal],
            ),
            // طْ: tafkheem, then qalqalah.
            ("\u{0637}\u{0652}", vec![TajweedRule::Qalqalah]),
        ];

        for (text, expected) in cases {
            assert_eq!(rules_of(text), expected, "text={text:?}");
        }
    }

    #[test]
    fn hamza_carrying_letters_follow_their_own_family() {
        let cases = [
            // بَأ and بَإ: alef family after fatha.
            ("\u{0628}\u{064E}\u{0623}", TajweedRule::Mad),
            ("\u{0628}\u{064E}\u{0625}", TajweedRule::Mad),
            // بُؤ: only plain waw elongates after damma.
            ("\u{0628}\u{064F}\u{0624}", TajweedRule::Normal),
            // بِئ: yeh with hamza is outside the yeh family.
            ("\u{0628}\u{0650}\u{0626}", TajweedRule::Normal),
            // بِؤٓ: any mad letter carrying maddah.
            ("\u{0628}\u{0650}\u{0624}\u{0653}", TajweedRule::Mad),
        ];

        for (text, expected) in cases {
            assert_eq!(rules_of(text)[1], expected, "text={text:?}");
        }
    }
}
