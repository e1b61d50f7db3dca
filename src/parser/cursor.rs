//! Character cursor over a single line of input
//!
//! There is no separate tokenizing pass. Every token in the grammar is a single
//! character, so the parser drives a [`Cursor`] directly: it peeks to decide
//! which alternative to take, calls [`Cursor::try_consume`] to match an
//! expected character and [`Cursor::advance`] to take one it has already
//! peeked. Whitespace is skipped at every token boundary.

/// Read position over the input characters.
///
/// The position only ever moves forward. Peeking never moves it, and
/// consuming moves it by exactly one character.
#[derive(Debug, Clone)]
pub struct Cursor {
    input: Vec<char>,
    position: usize,
}

impl Cursor {
    /// Create a new cursor at the start of `input`.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Next character without consuming it, `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Skip whitespace, then peek.
    pub fn skip_whitespace_and_peek(&mut self) -> Option<char> {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.position += 1;
        }
        self.peek()
    }

    /// Skip whitespace and consume the next character if it is `expected`.
    ///
    /// On a mismatch nothing but whitespace is consumed and `false` is
    /// returned; whether that is an error is up to the caller.
    pub fn try_consume(&mut self, expected: char) -> bool {
        if self.skip_whitespace_and_peek() != Some(expected) {
            return false;
        }
        self.position += 1;
        true
    }

    /// Consume the next character, whatever it is.
    ///
    /// For when the caller has already peeked and accepted it.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    /// 0-based character offset of the next unread character.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_advance() {
        let cursor = Cursor::new("12");
        assert_eq!(cursor.peek(), Some('1'));
        assert_eq!(cursor.peek(), Some('1'));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_try_consume_match_and_mismatch() {
        let mut cursor = Cursor::new("  ( 7");
        assert!(!cursor.try_consume(')'));
        // Only the whitespace was skipped
        assert_eq!(cursor.position(), 2);
        assert!(cursor.try_consume('('));
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.skip_whitespace_and_peek(), Some('7'));
        assert!(cursor.try_consume('7'));
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
        assert!(!cursor.try_consume('7'));
    }

    #[test]
    fn test_advance_takes_whatever_is_next() {
        let mut cursor = Cursor::new("4 ");
        assert_eq!(cursor.advance(), Some('4'));
        assert_eq!(cursor.position(), 1);
        // Whitespace is not skipped
        assert_eq!(cursor.advance(), Some(' '));
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_whitespace_only() {
        let mut cursor = Cursor::new(" \t\n ");
        assert_eq!(cursor.skip_whitespace_and_peek(), None);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_position_counts_chars_not_bytes() {
        let mut cursor = Cursor::new("é1");
        assert!(cursor.try_consume('é'));
        assert_eq!(cursor.position(), 1);
    }
}
