//! Letter taxonomy
//!
//! Static letter tables and the parsers and predicates derived from them.
//! Every predicate runs the matching parser on the leading cluster of a
//! fragment; whatever follows the cluster is ignored.

use crate::and::AndExt;
use crate::choice::choice;
use crate::cursors::{CharCursor, CharSource};
use crate::eos::eos;
use crate::error::ParseError;
use crate::label::LabelExt;
use crate::many::many;
use crate::map::MapExt;
use crate::not::not;
use crate::optional::optional;
use crate::parser::Parser;
use crate::position::PositionExt;
use crate::unit::{is_unit, unit_in};
use crate::whitespace::{TokenExt, skip_whitespace};
use tracing::debug;

pub const AYUDHAM: char = 'ஃ';
pub const PULLI: char = '்';

pub const UYIR_KURIL: [char; 5] = ['அ', 'இ', 'உ', 'எ', 'ஒ'];
pub const UYIR_NEDIL: [char; 7] = ['ஆ', 'ஈ', 'ஊ', 'ஏ', 'ஐ', 'ஓ', 'ஔ'];
pub const UYIR: [char; 13] = [
    'அ', 'இ', 'உ', 'எ', 'ஒ', 'ஆ', 'ஈ', 'ஊ', 'ஏ', 'ஐ', 'ஓ', 'ஔ', AYUDHAM,
];

pub const VALI: [char; 6] = ['க', 'ச', 'ட', 'த', 'ப', 'ற'];
pub const MELI: [char; 6] = ['ங', 'ஞ', 'ண', 'ந', 'ம', 'ன'];
pub const IDAI: [char; 6] = ['ய', 'ர', 'ல', 'வ', 'ழ', 'ள'];
pub const VADA: [char; 5] = ['ஶ', 'ஜ', 'ஷ', 'ஸ', 'ஹ'];
pub const TAMIL_MEI: [char; 18] = [
    'க', 'ச', 'ட', 'த', 'ப', 'ற', 'ங', 'ஞ', 'ண', 'ந', 'ம', 'ன', 'ய', 'ர', 'ல', 'வ', 'ழ', 'ள',
];
pub const MEI: [char; 23] = [
    'க', 'ச', 'ட', 'த', 'ப', 'ற', 'ங', 'ஞ', 'ண', 'ந', 'ம', 'ன', 'ய', 'ர', 'ல', 'வ', 'ழ', 'ள',
    'ஶ', 'ஜ', 'ஷ', 'ஸ', 'ஹ',
];

pub const KURIL_THUNAI: [char; 4] = ['ி', 'ு', 'ெ', 'ொ'];
pub const NEDIL_THUNAI: [char; 7] = ['ா', 'ீ', 'ூ', 'ே', 'ை', 'ோ', 'ௌ'];
pub const THUNAI: [char; 11] = ['ி', 'ு', 'ெ', 'ொ', 'ா', 'ீ', 'ூ', 'ே', 'ை', 'ோ', 'ௌ'];

/// Any sign that can follow a consonant inside one cluster
const SIGNS: [char; 12] = ['ி', 'ு', 'ெ', 'ொ', 'ா', 'ீ', 'ூ', 'ே', 'ை', 'ோ', 'ௌ', PULLI];

/// Long vowel to the short vowel it reduces to
pub const UYIR_INAM: [(char, char); 7] = [
    ('ஆ', 'அ'),
    ('ஈ', 'இ'),
    ('ஊ', 'உ'),
    ('ஏ', 'எ'),
    ('ஓ', 'ஒ'),
    ('ஐ', 'இ'),
    ('ஔ', 'உ'),
];

/// Hard consonant to its nasal counterpart
pub const MEI_INAM: [(char, char); 6] = [
    ('க', 'ங'),
    ('ச', 'ஞ'),
    ('ட', 'ண'),
    ('த', 'ந'),
    ('ப', 'ம'),
    ('ற', 'ன'),
];

/// Articulation class of a consonant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeiClass {
    /// Hard
    Vali,
    /// Soft (nasal)
    Meli,
    /// Medium
    Idai,
    /// Borrowed
    Vada,
    /// Vali, Meli and Idai together
    Tamil,
    /// Every consonant
    Any,
}

impl MeiClass {
    pub fn letters(self) -> &'static [char] {
        match self {
            MeiClass::Vali => &VALI,
            MeiClass::Meli => &MELI,
            MeiClass::Idai => &IDAI,
            MeiClass::Vada => &VADA,
            MeiClass::Tamil => &TAMIL_MEI,
            MeiClass::Any => &MEI,
        }
    }

    pub fn contains(self, letter: char) -> bool {
        self.letters().contains(&letter)
    }

    fn name(self) -> &'static str {
        match self {
            MeiClass::Vali => "vali",
            MeiClass::Meli => "meli",
            MeiClass::Idai => "idai",
            MeiClass::Vada => "vada",
            MeiClass::Tamil => "tamil",
            MeiClass::Any => "any",
        }
    }
}

pub fn uyir_inam(nedil: char) -> Option<char> {
    UYIR_INAM
        .iter()
        .find(|(long, _)| *long == nedil)
        .map(|(_, short)| *short)
}

pub fn mei_inam(vali: char) -> Option<char> {
    MEI_INAM
        .iter()
        .find(|(hard, _)| *hard == vali)
        .map(|(_, nasal)| *nasal)
}

// Uyir

pub fn uyir_kuril<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    unit_in(&UYIR_KURIL).label("uyir kuril").recognize()
}

pub fn uyir_nedil<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    unit_in(&UYIR_NEDIL).label("uyir nedil").recognize()
}

pub fn ayudham<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    is_unit(AYUDHAM).label("ayudham").recognize()
}

pub fn uyir<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    unit_in(&UYIR).label("uyir").recognize()
}

pub fn is_uyir_kuril(fragment: &str) -> bool {
    CharSource::new(fragment).parse(uyir_kuril()).is_ok()
}

pub fn is_uyir_nedil(fragment: &str) -> bool {
    CharSource::new(fragment).parse(uyir_nedil()).is_ok()
}

pub fn is_ayudham(fragment: &str) -> bool {
    CharSource::new(fragment).parse(ayudham()).is_ok()
}

pub fn is_uyir(fragment: &str) -> bool {
    CharSource::new(fragment).parse(uyir()).is_ok()
}

// Mei: consonant + pulli

pub fn mei<'code>(class: MeiClass) -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    unit_in(class.letters())
        .and(is_unit(PULLI))
        .label(format!("{} mei", class.name()))
        .recognize()
}

pub fn is_mei(class: MeiClass, fragment: &str) -> bool {
    CharSource::new(fragment).parse(mei(class)).is_ok()
}

// Uyirmei: consonant + optional vowel sign, never a pulli

pub fn uyirmei<'code>(
    class: MeiClass,
) -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    unit_in(class.letters())
        .and(optional(unit_in(&THUNAI)))
        .and(not(is_unit(PULLI)))
        .label(format!("{} uyirmei", class.name()))
        .recognize()
}

pub fn is_uyirmei(class: MeiClass, fragment: &str) -> bool {
    CharSource::new(fragment).parse(uyirmei(class)).is_ok()
}

// Thunai: the sign at the start of the fragment

pub fn is_pulli(fragment: &str) -> bool {
    CharSource::new(fragment).parse(is_unit(PULLI)).is_ok()
}

pub fn is_kuril_thunai(fragment: &str) -> bool {
    CharSource::new(fragment).parse(unit_in(&KURIL_THUNAI)).is_ok()
}

pub fn is_nedil_thunai(fragment: &str) -> bool {
    CharSource::new(fragment).parse(unit_in(&NEDIL_THUNAI)).is_ok()
}

pub fn is_thunai(fragment: &str) -> bool {
    CharSource::new(fragment).parse(unit_in(&THUNAI)).is_ok()
}

// Kuril and Nedil

/// Consonant with a short vowel sign, or with no sign at all (inherent அ)
pub fn mei_kuril<'code>(
    class: MeiClass,
) -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    unit_in(class.letters())
        .and(optional(unit_in(&KURIL_THUNAI)))
        .and(not(unit_in(&SIGNS)))
        .label(format!("{} mei kuril", class.name()))
        .recognize()
}

/// Consonant with a long vowel sign
pub fn mei_nedil<'code>(
    class: MeiClass,
) -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    unit_in(class.letters())
        .and(unit_in(&NEDIL_THUNAI))
        .label(format!("{} mei nedil", class.name()))
        .recognize()
}

/// Short cluster. A lone ayudham carries no sign, so it counts as short too.
pub fn kuril<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    choice((uyir_kuril(), ayudham(), mei_kuril(MeiClass::Any))).label("kuril")
}

pub fn nedil<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    choice((uyir_nedil(), mei_nedil(MeiClass::Any))).label("nedil")
}

pub fn is_mei_kuril(fragment: &str) -> bool {
    CharSource::new(fragment).parse(mei_kuril(MeiClass::Any)).is_ok()
}

pub fn is_mei_nedil(fragment: &str) -> bool {
    CharSource::new(fragment).parse(mei_nedil(MeiClass::Any)).is_ok()
}

pub fn is_kuril(fragment: &str) -> bool {
    CharSource::new(fragment).parse(kuril()).is_ok()
}

pub fn is_nedil(fragment: &str) -> bool {
    CharSource::new(fragment).parse(nedil()).is_ok()
}

// Letters and clusters

/// Primary letter: an uyir or a Tamil mei
pub fn tamil_letter<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    choice((uyir(), mei(MeiClass::Tamil))).label("tamil letter")
}

pub fn is_tamil_letter(fragment: &str) -> bool {
    CharSource::new(fragment).parse(tamil_letter()).is_ok()
}

/// One orthographic unit: uyir, mei or uyirmei
pub fn cluster<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    choice((uyir(), mei(MeiClass::Any), uyirmei(MeiClass::Any))).label("letter cluster")
}

/// Split a fragment into letter clusters, skipping whitespace between words
///
/// Fails at the first unit that does not start a cluster.
pub fn clusters(source: &CharSource) -> Result<Vec<String>, ParseError<'_>> {
    let parser = skip_whitespace()
        .and(many(cluster().token()))
        .and(eos().label("letter cluster"))
        .map(|((_, found), _)| found);

    match source.parse(parser) {
        Ok((found, _)) => Ok(found),
        Err(error) => {
            debug!(position = error.position(), "fragment is not a sequence of clusters");
            Err(error)
        }
    }
}
