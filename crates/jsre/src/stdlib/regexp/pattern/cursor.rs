// Forward-only view over the subject text.
//
// Copying a cursor is how the matcher forks: one branch advances its copy
// while the other still points at the fork position.

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a [char],
    index: usize,
}

impl<'a> Cursor<'a> {
    /// Cursor at `index`, clamped to the end of `text`.
    #[inline]
    pub fn new(text: &'a [char], index: usize) -> Self {
        Self {
            text,
            index: index.min(text.len()),
        }
    }

    /// Absolute character index into the subject.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline(always)]
    pub fn has_char(&self) -> bool {
        self.index < self.text.len()
    }

    /// Character under the cursor, `None` once the subject is exhausted.
    #[inline(always)]
    pub fn get_char(&self) -> Option<char> {
        self.text.get(self.index).copied()
    }

    /// Step one character forward. Stepping past the end is a no-op.
    #[inline(always)]
    pub fn next(&mut self) {
        if self.index < self.text.len() {
            self.index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_walks_and_stops() {
        let text: Vec<char> = "ab".chars().collect();
        let mut it = Cursor::new(&text, 0);
        assert_eq!(it.get_char(), Some('a'));
        it.next();
        assert_eq!(it.get_char(), Some('b'));
        it.next();
        assert!(!it.has_char());
        assert_eq!(it.get_char(), None);
        it.next();
        assert_eq!(it.index(), 2);
    }

    #[test]
    fn test_cursor_copy_is_independent() {
        let text: Vec<char> = "xyz".chars().collect();
        let it = Cursor::new(&text, 1);
        let mut fork = it;
        fork.next();
        assert_eq!(it.index(), 1);
        assert_eq!(fork.index(), 2);
    }

    #[test]
    fn test_cursor_clamps_start() {
        let text: Vec<char> = "xyz".chars().collect();
        assert_eq!(Cursor::new(&text, 10).index(), 3);
    }
}
