use crate::transition::state::{Generation, TransitionState};

/// One old character reused at a position of the new text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharMove {
    /// The shared character.
    pub ch: char,
    /// Index in the old text.
    pub from: usize,
    /// Index in the new text.
    pub to: usize,
}

/// Pairing of old characters with equal characters of the new text.
///
/// Each old character, left to right, takes the first unclaimed equal character of the new
/// text. Paired characters slide to their new slot; the rest fade out or in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharDiff {
    moves: Vec<CharMove>,
    old_to_new: Vec<Option<usize>>,
    new_claimed: Vec<bool>,
}

impl CharDiff {
    /// Diff `old` against `new`.
    pub fn compute(old: &[char], new: &[char]) -> Self {
        let mut moves = Vec::new();
        let mut old_to_new = vec![None; old.len()];
        let mut new_claimed = vec![false; new.len()];

        for (from, &ch) in old.iter().enumerate() {
            let hit = new
                .iter()
                .enumerate()
                .find(|&(j, &c)| c == ch && !new_claimed[j])
                .map(|(j, _)| j);
            if let Some(to) = hit {
                new_claimed[to] = true;
                old_to_new[from] = Some(to);
                moves.push(CharMove { ch, from, to });
            }
        }

        Self {
            moves,
            old_to_new,
            new_claimed,
        }
    }

    /// New index old character `from` moves to, if it is reused.
    pub fn need_move(&self, from: usize) -> Option<usize> {
        self.old_to_new.get(from).copied().flatten()
    }

    /// `true` when new character `to` is covered by a moving old character.
    pub fn stays(&self, to: usize) -> bool {
        self.new_claimed.get(to).copied().unwrap_or(false)
    }

    /// All pairings in old-text order.
    pub fn moves(&self) -> &[CharMove] {
        &self.moves
    }
}

/// Linear interpolation between two slot positions.
pub fn lerp_x(from: f32, to: f32, p: f32) -> f32 {
    from + (to - from) * p
}

/// X of a moving old character: it slides from its old slot to its new one during the first
/// half of the ramp and rests there afterwards.
pub fn slide_x(state: &TransitionState, from: usize, to: usize) -> f32 {
    let p = (state.progress() * 2.0).min(1.0);
    lerp_x(
        state.slot_x(Generation::Old, from),
        state.slot_x(Generation::New, to),
        p,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/effects/diff.rs"]
mod tests;
