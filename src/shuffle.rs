//! Deterministic shuffles over positional card sequences.
//!
//! Neither shuffle draws randomness of its own. Entropy comes only from how
//! many times the caller asks for a shuffle, so both are plain functions of
//! their input and safe to test against fixed orderings.
//!
//! Index 0 is the top of the deck.

use alloc::vec::Vec;

/// Modified overhand shuffle, applied in place.
///
/// Takes `num` cards from the middle of the sequence and moves them to the
/// top, then repeats with `num - 1`, `num - 2` and so on down to 1. The middle
/// block straddles the half boundary `len / 2`: `num / 2` cards come from each
/// side, and the odd card out (when `num` or the length is odd) is taken from
/// the bottom of the first half. Blocks wider than a half are clamped to it.
///
/// ```
/// let mut cards: Vec<usize> = (0..52).collect();
/// bjsim::shuffle::modified_overhand(&mut cards, 1);
/// assert_eq!(cards[0], 25);
/// assert_eq!(cards[25], 24);
/// ```
pub fn modified_overhand<T>(cards: &mut [T], num: usize) {
    let len = cards.len();
    let half = len / 2;

    for pass in (1..=num).rev() {
        let extra = usize::from(len % 2 == 1 || pass % 2 == 1);
        let from_first = (pass / 2 + extra).min(half);
        let from_second = (pass / 2).min(len - half);

        // The block [half - from_first, half + from_second) sits at the end of
        // this prefix, so rotating the prefix lifts it to the top.
        cards[..half + from_second].rotate_right(from_first + from_second);
    }
}

/// One pass of the mongean shuffle, applied in place.
///
/// The top card lands in the middle. Cards at odd positions are stacked above
/// it and cards at even positions (after the first) below it; each side runs
/// top-down when its source run has even length and bottom-up otherwise.
/// Twelve passes over 52 cards restore the original order.
///
/// ```
/// let mut cards: Vec<usize> = (0..10).collect();
/// bjsim::shuffle::mongean(&mut cards);
/// assert_eq!(cards, [9, 7, 5, 3, 1, 0, 2, 4, 6, 8]);
/// ```
pub fn mongean<T: Clone>(cards: &mut [T]) {
    if cards.len() < 2 {
        return;
    }

    let source: Vec<T> = cards.to_vec();
    let above = alternate(&source[1..], cards);
    cards[above].clone_from(&source[0]);
    alternate(&source[2..], &mut cards[above + 1..]);
}

/// Copies every other element of `source`, starting with its first, into the
/// front of `dest`. The picks keep their order when `source` has even length
/// and are reversed otherwise. Returns how many elements were written.
fn alternate<T: Clone>(source: &[T], dest: &mut [T]) -> usize {
    let picks = source.iter().step_by(2);
    let count = picks.len();

    if source.len() % 2 == 0 {
        for (slot, card) in dest.iter_mut().zip(picks) {
            slot.clone_from(card);
        }
    } else {
        for (slot, card) in dest.iter_mut().zip(picks.rev()) {
            slot.clone_from(card);
        }
    }

    count
}
