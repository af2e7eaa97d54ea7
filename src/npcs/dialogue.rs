//! Per-Scouter dialogue sessions: typewriter reveal, skip-to-end, line
//! pauses and script completion.

use bevy::prelude::*;

use super::scripts::ScriptId;

/// Ticks between revealed characters is this plus one.
pub const REVEAL_GAP: u32 = 2;
/// Ticks a fully revealed line stays up before moving on by itself.
pub const LINE_PAUSE: i32 = 240;

const HIGHLIGHT_TOGGLE: char = '\\';
const LINE_BREAK: char = '\n';

/// One displayable unit of a parsed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Char { ch: char, highlighted: bool },
    Break,
}

/// Splits a line into glyphs, consuming the markup delimiters.
pub fn parse_markup(line: &str) -> Vec<Glyph> {
    let mut highlighted = false;
    let mut glyphs = Vec::with_capacity(line.len());
    for ch in line.chars() {
        match ch {
            HIGHLIGHT_TOGGLE => highlighted = !highlighted,
            LINE_BREAK => glyphs.push(Glyph::Break),
            ch => glyphs.push(Glyph::Char { ch, highlighted }),
        }
    }
    glyphs
}

/// Number of revealable characters in a line (delimiters excluded).
pub fn visible_len(line: &str) -> usize {
    line.chars()
        .filter(|&c| c != HIGHLIGHT_TOGGLE && c != LINE_BREAK)
        .count()
}

/// Dialogue state of one Scouter. Silent while `script` is `None`.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct DialogueSession {
    pub script: Option<ScriptId>,
    pub line: usize,
    /// Characters of the current line revealed so far.
    pub cursor: usize,
    pub frames_since_reveal: u32,
    pub pause: i32,
}

impl Default for DialogueSession {
    fn default() -> Self {
        Self {
            script: None,
            line: 0,
            cursor: 0,
            frames_since_reveal: 0,
            pause: LINE_PAUSE,
        }
    }
}

impl DialogueSession {
    pub fn is_silent(&self) -> bool {
        self.script.is_none()
    }

    pub fn current_line(&self) -> Option<&'static str> {
        self.script.and_then(|s| s.lines().get(self.line).copied())
    }

    pub fn line_revealed(&self) -> bool {
        self.current_line()
            .map(|line| self.cursor >= visible_len(line))
            .unwrap_or(true)
    }

    /// Returns the session to silent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The player pressed interact. A silent session starts `start` at its
    /// first line; a half-typed line is revealed at once; a revealed line
    /// moves on. Returns the script if it just finished.
    pub fn interact(&mut self, start: ScriptId) -> Option<ScriptId> {
        if self.is_silent() {
            *self = Self {
                script: Some(start),
                ..Self::default()
            };
            return None;
        }
        if self.line_revealed() {
            self.next_line()
        } else {
            if let Some(line) = self.current_line() {
                self.cursor = visible_len(line);
            }
            None
        }
    }

    /// Advances the typewriter one tick. Returns the script if it finished.
    pub fn tick(&mut self) -> Option<ScriptId> {
        if self.is_silent() {
            return None;
        }
        if self.frames_since_reveal < REVEAL_GAP {
            self.frames_since_reveal += 1;
            return None;
        }
        if self.line_revealed() {
            if self.pause <= 0 {
                return self.next_line();
            }
            self.pause -= 1;
        } else {
            self.cursor += 1;
            self.frames_since_reveal = 0;
        }
        None
    }

    fn next_line(&mut self) -> Option<ScriptId> {
        let script = self.script?;
        self.pause = LINE_PAUSE;
        self.line += 1;
        self.cursor = 0;
        if self.line >= script.lines().len() {
            self.reset();
            return Some(script);
        }
        None
    }

    /// Glyphs of the current line up to the typewriter cursor.
    pub fn visible_glyphs(&self) -> Vec<Glyph> {
        let Some(line) = self.current_line() else {
            return Vec::new();
        };
        let mut shown = 0;
        let mut out = Vec::new();
        for glyph in parse_markup(line) {
            if let Glyph::Char { .. } = glyph {
                if shown >= self.cursor {
                    break;
                }
                shown += 1;
            }
            out.push(glyph);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ScouterName;

    #[test]
    fn test_markup_consumes_delimiters() {
        let glyphs = parse_markup("a \\Rk\\\nb");
        assert_eq!(
            glyphs,
            vec![
                Glyph::Char { ch: 'a', highlighted: false },
                Glyph::Char { ch: ' ', highlighted: false },
                Glyph::Char { ch: 'R', highlighted: true },
                Glyph::Char { ch: 'k', highlighted: true },
                Glyph::Break,
                Glyph::Char { ch: 'b', highlighted: false },
            ]
        );
        assert_eq!(visible_len("a \\Rk\\\nb"), 5);
    }

    #[test]
    fn test_typewriter_reveals_every_third_tick() {
        let mut session = DialogueSession::default();
        session.interact(ScriptId::Quest(0));
        assert_eq!(session.cursor, 0);
        for _ in 0..9 {
            session.tick();
        }
        assert_eq!(session.cursor, 3);
    }

    #[test]
    fn test_interact_skips_then_advances() {
        let mut session = DialogueSession::default();
        let script = ScriptId::Idle(ScouterName::Braydon);
        assert_eq!(session.interact(script), None);
        assert_eq!(session.line, 0);

        session.interact(script);
        assert!(session.line_revealed(), "second press reveals the line");
        assert_eq!(session.line, 0);

        session.interact(script);
        assert_eq!(session.line, 1);
        assert_eq!(session.cursor, 0);

        session.interact(script);
        assert_eq!(session.interact(script), Some(script), "past the last line finishes");
        assert!(session.is_silent());
    }

    #[test]
    fn test_pause_auto_advances() {
        let mut session = DialogueSession::default();
        let script = ScriptId::Idle(ScouterName::Bryant);
        session.interact(script);
        session.interact(script);
        let mut finished = None;
        for _ in 0..(REVEAL_GAP as i32 + LINE_PAUSE + 2) {
            if let Some(done) = session.tick() {
                finished = Some(done);
                break;
            }
        }
        assert_eq!(finished, Some(script));
        assert!(session.is_silent());
    }

    #[test]
    fn test_visible_glyphs_follow_cursor() {
        let mut session = DialogueSession::default();
        session.interact(ScriptId::Idle(ScouterName::Hubert));
        session.cursor = 4;
        let text: String = session
            .visible_glyphs()
            .into_iter()
            .filter_map(|g| match g {
                Glyph::Char { ch, .. } => Some(ch),
                Glyph::Break => None,
            })
            .collect();
        assert_eq!(text, "Have");
    }
}
