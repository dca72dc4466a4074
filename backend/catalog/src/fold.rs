//! Case and diacritic folding shared by the index and incoming queries.
//!
//! Both sides must go through [`fold`], otherwise `kjott` stops matching `Kjøttdeig`.
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

pub fn fold(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for c in text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
    {
        // letters NFD leaves alone, or that we want spelled out
        match c {
            'æ' => folded.push_str("ae"),
            'ø' => folded.push('o'),
            'å' => folded.push('a'),
            'œ' => folded.push_str("oe"),
            'ä' => folded.push('a'),
            'ö' => folded.push('o'),
            'ü' => folded.push('u'),
            _ => folded.push(c),
        }
    }

    folded
}

pub fn fold_opt(text: Option<&str>) -> String {
    text.map(fold).unwrap_or_default()
}
