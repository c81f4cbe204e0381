use crate::types::Marking;

/// Character-offset view over a document text
pub struct TextIndex<'a> {
    text: &'a str,
    /// Byte offset of every char, plus `text.len()` as a sentinel
    offsets: Vec<usize>,
}

impl<'a> TextIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut offsets: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
        offsets.push(text.len());
        Self { text, offsets }
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text between two char offsets
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a str> {
        if start > end {
            return None;
        }
        let from = *self.offsets.get(start)?;
        let to = *self.offsets.get(end)?;
        Some(&self.text[from..to])
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.slice(index, index.checked_add(1)?)?.chars().next()
    }

    /// Resolve a marking's span; `None` if it is empty or runs past the text
    pub fn span(&self, marking: &Marking) -> Option<Span<'a>> {
        if marking.length == 0 {
            return None;
        }
        let surface = self.slice(marking.start, marking.end())?;
        let before = marking
            .start
            .checked_sub(1)
            .and_then(|index| self.char_at(index));
        let after = self.char_at(marking.end());
        Some(Span {
            surface,
            before,
            after,
        })
    }
}

/// Surface text of a marking with its immediate neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub surface: &'a str,
    pub before: Option<char>,
    pub after: Option<char>,
}

impl<'a> Span<'a> {
    pub fn starts_mid_word(&self) -> bool {
        is_word_char(self.before) && is_word_char(self.surface.chars().next())
    }

    pub fn ends_mid_word(&self) -> bool {
        is_word_char(self.after) && is_word_char(self.surface.chars().next_back())
    }

    pub fn has_outer_whitespace(&self) -> bool {
        self.surface.starts_with(char::is_whitespace) || self.surface.ends_with(char::is_whitespace)
    }

    /// Span starts and ends on word boundaries without surrounding whitespace
    pub fn is_word_aligned(&self) -> bool {
        !self.has_outer_whitespace() && !self.starts_mid_word() && !self.ends_mid_word()
    }

    /// Whitespace-separated tokens with surrounding punctuation removed
    pub fn tokens(&self) -> impl Iterator<Item = &'a str> {
        self.surface
            .split_whitespace()
            .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|token| !token.is_empty())
    }
}

fn is_word_char(c: Option<char>) -> bool {
    c.is_some_and(char::is_alphanumeric)
}
