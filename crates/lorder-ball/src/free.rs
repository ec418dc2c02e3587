use lorder_core::{invert_letter, Word};

/// Letters in enumeration order: generators first, then their inverses.
pub fn letters(generators: &[char]) -> Vec<char> {
    generators
        .iter()
        .copied()
        .chain(generators.iter().copied().map(invert_letter))
        .collect()
}

/// Enumerates every freely reduced word of length at most `radius`.
///
/// Words come out layer by layer: the empty word, the single letters, then
/// each word of the previous layer extended by every letter that does not
/// cancel its last letter.
pub fn free_ball(generators: &[char], radius: usize) -> Vec<Word> {
    let letters = letters(generators);
    let mut words = vec![Word::empty()];
    if radius == 0 {
        return words;
    }
    let mut layer: Vec<Word> = letters.iter().map(|&letter| Word::letter(letter)).collect();
    words.extend(layer.iter().cloned());
    for _ in 1..radius {
        let mut next = Vec::with_capacity(layer.len() * letters.len());
        for word in &layer {
            next.extend(letters.iter().filter_map(|&letter| word.extended(letter)));
        }
        words.extend(next.iter().cloned());
        layer = next;
    }
    words
}

/// Number of words [`free_ball`] returns for `rank` generators.
pub fn free_ball_size(rank: usize, radius: usize) -> usize {
    if rank == 0 {
        return 1;
    }
    let branching = 2 * rank - 1;
    let mut layer = 2 * rank;
    let mut total = 1;
    for _ in 0..radius {
        total += layer;
        layer *= branching;
    }
    total
}
