//! Kurukkam (shortening) rules and mora counting
//!
//! Each rule is a parser over the leading cluster of a fragment plus an
//! `is_*` predicate built on it. [`nodi`] tries the rules in a fixed order
//! and the first one that applies decides the duration.

use crate::and::AndExt;
use crate::choice::choice;
use crate::cursors::{CharCursor, CharSource};
use crate::map::MapExt;
use crate::not::not;
use crate::parser::Parser;
use crate::position::PositionExt;
use crate::succeed::not_implemented;
use crate::tamil::letters::{MEI, is_kuril, is_nedil};
use crate::unit::{is_unit, unit_in};
use crate::whitespace::whitespace;
use tracing::{debug, trace};

const AI_SIGN: char = 'ை';
const AU_SIGN: char = 'ௌ';
const AU: char = 'ஔ';

/// Duration of a letter cluster in matras
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nodi {
    Half,
    One,
    Two,
}

impl Nodi {
    /// Duration in half-matra units, so durations can be summed as integers
    pub fn half_units(self) -> u8 {
        match self {
            Nodi::Half => 1,
            Nodi::One => 2,
            Nodi::Two => 4,
        }
    }
}

// Half-matra rules. Their conditions depend on word context, which is not
// modelled yet; until then they never match.

/// Shortened உ at the end of a word
pub fn kuttrialukaram<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    not_implemented("kuttrialukaram")
}

/// Shortened இ arising from kuttrialukaram before ய
pub fn kuttrialikaram<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    not_implemented("kuttrialikaram")
}

/// Shortened ம் after ன் or ண் and before வ
pub fn makara_kurukkam<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    not_implemented("makara kurukkam")
}

/// Shortened ஃ
pub fn ayudha_kurukkam<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    not_implemented("ayudha kurukkam")
}

/// Consonant carrying ை, followed by the end of the fragment or by another
/// letter on the same word
pub fn aikara_kurukkam<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    unit_in(&MEI)
        .and(is_unit(AI_SIGN))
        .recognize()
        .and(not(whitespace()))
        .map(|(cluster, ())| cluster)
}

/// ஔ on its own, or a consonant carrying ௌ
pub fn aukara_kurukkam<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    choice((
        is_unit(AU).recognize(),
        unit_in(&MEI).and(is_unit(AU_SIGN)).recognize(),
    ))
}

pub fn is_kuttrialukaram(fragment: &str) -> bool {
    CharSource::new(fragment).parse(kuttrialukaram()).is_ok()
}

pub fn is_kuttrialikaram(fragment: &str) -> bool {
    CharSource::new(fragment).parse(kuttrialikaram()).is_ok()
}

pub fn is_makara_kurukkam(fragment: &str) -> bool {
    CharSource::new(fragment).parse(makara_kurukkam()).is_ok()
}

pub fn is_ayudha_kurukkam(fragment: &str) -> bool {
    CharSource::new(fragment).parse(ayudha_kurukkam()).is_ok()
}

pub fn is_aikara_kurukkam(fragment: &str) -> bool {
    CharSource::new(fragment).parse(aikara_kurukkam()).is_ok()
}

pub fn is_aukara_kurukkam(fragment: &str) -> bool {
    CharSource::new(fragment).parse(aukara_kurukkam()).is_ok()
}

type Rule = (&'static str, fn(&str) -> bool, Nodi);

const RULES: [Rule; 8] = [
    ("kuttrialukaram", is_kuttrialukaram, Nodi::Half),
    ("kuttrialikaram", is_kuttrialikaram, Nodi::Half),
    ("makara kurukkam", is_makara_kurukkam, Nodi::Half),
    ("ayudha kurukkam", is_ayudha_kurukkam, Nodi::Half),
    ("aikara kurukkam", is_aikara_kurukkam, Nodi::One),
    ("aukara kurukkam", is_aukara_kurukkam, Nodi::One),
    ("kuril", is_kuril, Nodi::One),
    ("nedil", is_nedil, Nodi::Two),
];

/// Duration of the leading cluster of `fragment`
///
/// Returns `None` when no rule applies, e.g. for a consonant with pulli, an
/// empty fragment or anything outside the Tamil letter set.
pub fn nodi(fragment: &str) -> Option<Nodi> {
    match RULES.iter().find(|(_, applies, _)| applies(fragment)) {
        Some((rule, _, nodi)) => {
            trace!(fragment, rule, ?nodi, "kurukkam rule matched");
            Some(*nodi)
        }
        None => {
            debug!(fragment, "no duration rule applies");
            None
        }
    }
}
