//! Lightweight similarity scoring between a pointer and a candidate
//! sentence: a greedy longest-matching-blocks character ratio plus a
//! keyword containment bonus. Dependency-free on purpose so scores
//! stay bit-identical across runs and platforms.

use std::collections::HashMap;

/// Greedy longest-matching-blocks ratio over characters,
/// `2 * M / (len(a) + len(b))` where `M` is the total size of the
/// matching blocks. Yields 1.0 when both strings are empty. This is
/// NOT edit distance; substituted characters contribute nothing.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Total matched characters: repeatedly take the longest common
/// contiguous block and recurse into the pieces on either side of it.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    let mut total = 0usize;
    let mut pending = vec![(0usize, a.len(), 0usize, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if size > 0 {
            total += size;
            pending.push((alo, i, blo, j));
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    total
}

/// Longest contiguous block `a[i..i+size] == b[j..j+size]` within the
/// given windows. Ties resolve to the earliest block in `a`. `b2j`
/// maps each character of `b` to its ascending positions.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut besti = alo;
    let mut bestj = blo;
    let mut bestsize = 0usize;
    // j2len[j] = length of the block ending at a[i-1], b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for i in alo..ahi {
        let mut newj2len: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = if j > blo {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                newj2len.insert(j, k);
                if k > bestsize {
                    besti = i + 1 - k;
                    bestj = j + 1 - k;
                    bestsize = k;
                }
            }
        }
        j2len = newj2len;
    }
    (besti, bestj, bestsize)
}

/// Word tokens of a string: maximal runs of alphanumeric or
/// underscore characters.
fn word_tokens(s: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in s.chars() {
        if c.is_alphanumeric() || c == '_' {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Similarity between a pointer and one sentence: the block ratio of
/// the lower-cased strings plus 0.1 per pointer token contained in the
/// sentence. Containment is plain substring search, so a token inside
/// a longer word still counts, and a token repeated in the pointer
/// counts every time.
pub fn score(pointer: &str, sentence: &str) -> f64 {
    let sentence_lower = sentence.to_lowercase();
    let pointer_lower = pointer.to_lowercase();
    let ratio = sequence_ratio(&sentence_lower, &pointer_lower);
    let hits = word_tokens(&pointer_lower)
        .iter()
        .filter(|t| sentence_lower.contains(t.as_str()))
        .count();
    ratio + 0.1 * hits as f64
}
