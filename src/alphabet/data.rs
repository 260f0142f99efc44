//! Single source of truth for the Uzbek Latin ⇄ Cyrillic correspondence.
//!
//! 1995 Latin orthography: 24 single letters, the five digraphs `sh ch ng o' g'`,
//! and the tutuq belgisi `'` ⇄ `ъ`. Both case forms are separate keys so the
//! transliterator copies case with a plain lookup. The `table_contract` unit test
//! asserts the two single-letter maps stay mutual inverses over the core set.

use crate::alphabet::DigraphRule;
use phf::{Map, phf_map};

/// Latin → Cyrillic single-letter rules, both case forms.
pub static LATIN_SINGLE: Map<char, char> = phf_map! {
    'a' => 'а', 'b' => 'б', 'd' => 'д', 'e' => 'е', 'f' => 'ф',
    'g' => 'г', 'h' => 'ҳ', 'i' => 'и', 'j' => 'ж', 'k' => 'к',
    'l' => 'л', 'm' => 'м', 'n' => 'н', 'o' => 'о', 'p' => 'п',
    'q' => 'қ', 'r' => 'р', 's' => 'с', 't' => 'т', 'u' => 'у',
    'v' => 'в', 'x' => 'х', 'y' => 'й', 'z' => 'з',
    'A' => 'А', 'B' => 'Б', 'D' => 'Д', 'E' => 'Е', 'F' => 'Ф',
    'G' => 'Г', 'H' => 'Ҳ', 'I' => 'И', 'J' => 'Ж', 'K' => 'К',
    'L' => 'Л', 'M' => 'М', 'N' => 'Н', 'O' => 'О', 'P' => 'П',
    'Q' => 'Қ', 'R' => 'Р', 'S' => 'С', 'T' => 'Т', 'U' => 'У',
    'V' => 'В', 'X' => 'Х', 'Y' => 'Й', 'Z' => 'З',
    // Tutuq belgisi (apostrophe consonant mark). Caseless.
    '\'' => 'ъ',
};

/// Cyrillic → Latin single-letter rules, both case forms.
///
/// Values are strings because digraph reversals expand (`ш` → `"sh"`). Entries
/// below the core block are one-way completions for Russian-era letters: the
/// Latin → Cyrillic direction never produces them, so they carry no round-trip
/// guarantee (`ц` → `ts`, but `ts` → `тс`). `ь` is elided, matching standard
/// practice (`альбом` → `albom`).
pub static CYRILLIC_SINGLE: Map<char, &'static str> = phf_map! {
    'а' => "a", 'б' => "b", 'в' => "v", 'г' => "g", 'д' => "d",
    'е' => "e", 'ж' => "j", 'з' => "z", 'и' => "i", 'й' => "y",
    'к' => "k", 'л' => "l", 'м' => "m", 'н' => "n", 'о' => "o",
    'п' => "p", 'р' => "r", 'с' => "s", 'т' => "t", 'у' => "u",
    'ф' => "f", 'х' => "x", 'ч' => "ch", 'ш' => "sh", 'ъ' => "'",
    'ў' => "o'", 'қ' => "q", 'ғ' => "g'", 'ҳ' => "h",
    'А' => "A", 'Б' => "B", 'В' => "V", 'Г' => "G", 'Д' => "D",
    'Е' => "E", 'Ж' => "J", 'З' => "Z", 'И' => "I", 'Й' => "Y",
    'К' => "K", 'Л' => "L", 'М' => "M", 'Н' => "N", 'О' => "O",
    'П' => "P", 'Р' => "R", 'С' => "S", 'Т' => "T", 'У' => "U",
    'Ф' => "F", 'Х' => "X", 'Ч' => "Ch", 'Ш' => "Sh", 'Ъ' => "'",
    'Ў' => "O'", 'Қ' => "Q", 'Ғ' => "G'", 'Ҳ' => "H",
    // One-way reverse completions.
    'ё' => "yo", 'ю' => "yu", 'я' => "ya", 'ц' => "ts", 'э' => "e",
    'щ' => "sh", 'ы' => "i", 'ь' => "",
    'Ё' => "Yo", 'Ю' => "Yu", 'Я' => "Ya", 'Ц' => "Ts", 'Э' => "E",
    'Щ' => "Sh", 'Ы' => "I", 'Ь' => "",
};

/// Latin-side digraphs, tried before any single-letter rule at the same
/// position. First characters never collide, so scan order is irrelevant.
pub static LATIN_DIGRAPHS: &[DigraphRule] = &[
    DigraphRule { first: 's', second: 'h', lower: "ш", title: "Ш", upper: "Ш" },
    DigraphRule { first: 'c', second: 'h', lower: "ч", title: "Ч", upper: "Ч" },
    DigraphRule { first: 'n', second: 'g', lower: "нг", title: "Нг", upper: "НГ" },
    DigraphRule { first: 'o', second: '\'', lower: "ў", title: "Ў", upper: "Ў" },
    DigraphRule { first: 'g', second: '\'', lower: "ғ", title: "Ғ", upper: "Ғ" },
];

/// The one digraph on the Cyrillic-reading side: `нг` always expands to `ng`.
pub static CYRILLIC_DIGRAPHS: &[DigraphRule] = &[
    DigraphRule { first: 'н', second: 'г', lower: "ng", title: "Ng", upper: "NG" },
];
