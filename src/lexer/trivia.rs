use super::tokens::Token;

/// Attributes whitespace and comment code points to staged tokens.
///
/// While an owner is set, trivia extends that token's trailing region;
/// otherwise it is held as leading trivia for the next token.
#[derive(Debug, Default)]
pub struct TriviaAccumulator {
    pending: usize,
    owner: Option<usize>,
}

impl TriviaAccumulator {
    pub fn new() -> Self {
        TriviaAccumulator::default()
    }

    pub fn push(&mut self, tokens: &mut [Token], count: usize) {
        match self.owner.and_then(|index| tokens.get_mut(index)) {
            Some(token) => {
                token.trailing_trivia += count;
                token.span.end += count;
            }
            None => self.pending += count,
        }
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn take_leading(&mut self) -> usize {
        std::mem::take(&mut self.pending)
    }

    pub fn attach(&mut self, index: usize) {
        self.owner = Some(index);
    }

    pub fn detach(&mut self) {
        self.owner = None;
    }

    /// Folds trivia left at the end of input onto the last token that is
    /// not an indentation token. Only contiguous trivia is folded: after a
    /// malformed literal the pending run does not touch the last token.
    pub fn fold_into_last(&mut self, tokens: &mut [Token], end_of_input: usize) -> bool {
        if self.pending == 0 {
            return true;
        }

        let pending = self.pending;
        let Some(last) = tokens.iter_mut().rev().find(|token| !token.is_indentation()) else {
            return false;
        };

        if last.span.end + pending != end_of_input {
            return false;
        }

        last.trailing_trivia += pending;
        last.span.end += pending;
        self.pending = 0;

        true
    }
}
