//! Display-name collation.
//!
//! Activity names are Portuguese display strings (`Área de Risco`,
//! `Auto de Infração`). Plain byte ordering would push every accented initial
//! after `z`, so names are compared by an accent- and case-folded key first
//! and by the raw string only to break ties. Distinct names never compare
//! equal.

use std::cmp::Ordering;

/// Compare two display names in catalog order.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

/// Lowercase `value` and strip Latin diacritics.
#[must_use]
pub fn fold(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .map(strip_diacritic)
        .collect()
}

const fn strip_diacritic(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
