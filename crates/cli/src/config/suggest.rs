// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key name suggestions for config validation.

use std::path::Path;

/// Suggest a known key for a probable typo.
pub fn suggest_key<'a>(unknown: &str, known: &[&'a str]) -> Option<&'a str> {
    // Empty strings can't be typos
    if unknown.is_empty() {
        return None;
    }

    // Prefix matching (require at least 2 chars to avoid false positives)
    if unknown.len() >= 2 {
        for &name in known {
            if name.starts_with(unknown) || unknown.starts_with(name) {
                return Some(name);
            }
        }
    }

    known
        .iter()
        .map(|&name| (edit_distance(unknown, name), name))
        .filter(|&(distance, _)| distance <= 2)
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, name)| name)
}

/// Levenshtein distance over bytes.
fn edit_distance(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut row = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(ca != cb);
            row[j + 1] = substitute.min(prev[j + 1] + 1).min(row[j] + 1);
        }
        std::mem::swap(&mut prev, &mut row);
    }

    prev[b.len()]
}

/// Warn about an unknown key, with a suggestion when one is close.
///
/// `key` may be dotted (`scan.hiden`); only the last segment is compared.
pub fn warn_unknown_key(path: &Path, key: &str, known: &[&str]) {
    let leaf = key.rsplit('.').next().unwrap_or(key);
    match suggest_key(leaf, known) {
        Some(suggested) => eprintln!(
            "multimatch: warning: {}: unrecognized field `{}`. Did you mean `{}`?",
            path.display(),
            key,
            suggested
        ),
        None => eprintln!(
            "multimatch: warning: {}: unrecognized field `{}` (ignored)",
            path.display(),
            key
        ),
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
