//! Ranked high-score boards and their flat-file form.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use crate::economy::campfire::format_ticks;
use crate::shared::*;

/// Entries kept per board.
pub const BOARD_CAPACITY: usize = 5;
/// Distance pixels per displayed metre.
pub const PIXELS_PER_METRE: f64 = 80.0;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Score {
    pub name: String,
    pub value: u64,
    /// Epoch milliseconds when the score was recorded.
    pub time: u64,
}

impl Ord for Score {
    /// Higher value first; older scores break ties, then name.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .value
            .cmp(&self.value)
            .then(self.time.cmp(&other.time))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One category's ranking: at most one entry per name, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    ranked: BTreeSet<Score>,
    by_name: HashMap<String, Score>,
}

impl Leaderboard {
    /// Records `value` for `name` unless they already hold a score at least
    /// as good, then trims the board. Returns whether the entry changed.
    pub fn submit(&mut self, name: &str, value: u64, time: u64) -> bool {
        if let Some(existing) = self.by_name.get(name) {
            if existing.value >= value {
                return false;
            }
            let old = existing.clone();
            self.ranked.remove(&old);
        }
        let score = Score {
            name: name.to_string(),
            value,
            time,
        };
        self.ranked.insert(score.clone());
        self.by_name.insert(score.name.clone(), score);
        self.trim();
        true
    }

    fn trim(&mut self) {
        while self.ranked.len() > BOARD_CAPACITY {
            if let Some(last) = self.ranked.pop_last() {
                self.by_name.remove(&last.name);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Score> {
        self.by_name.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Score> {
        self.ranked.iter()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreCategory {
    Mosquitoes,
    Campfire,
    Distance,
}

impl ScoreCategory {
    /// File stanza order.
    pub const ALL: [ScoreCategory; 3] = [
        ScoreCategory::Mosquitoes,
        ScoreCategory::Campfire,
        ScoreCategory::Distance,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ScoreCategory::Mosquitoes => "Mosquitoes Swatted",
            ScoreCategory::Campfire => "Campfire Time",
            ScoreCategory::Distance => "Distance Travelled",
        }
    }

    pub fn format_value(self, value: u64) -> String {
        match self {
            ScoreCategory::Mosquitoes => value.to_string(),
            ScoreCategory::Campfire => format_ticks(value.min(i32::MAX as u64) as i32),
            ScoreCategory::Distance => format_distance(value),
        }
    }
}

/// Distance pixels as metres with one decimal, e.g. `"12.5 m"`.
pub fn format_distance(pixels: u64) -> String {
    format!("{:.1} m", pixels as f64 / PIXELS_PER_METRE)
}

/// All three boards.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    pub mosquitoes: Leaderboard,
    pub campfire: Leaderboard,
    pub distance: Leaderboard,
}

impl ScoreLedger {
    pub fn board(&self, category: ScoreCategory) -> &Leaderboard {
        match category {
            ScoreCategory::Mosquitoes => &self.mosquitoes,
            ScoreCategory::Campfire => &self.campfire,
            ScoreCategory::Distance => &self.distance,
        }
    }

    pub fn board_mut(&mut self, category: ScoreCategory) -> &mut Leaderboard {
        match category {
            ScoreCategory::Mosquitoes => &mut self.mosquitoes,
            ScoreCategory::Campfire => &mut self.campfire,
            ScoreCategory::Distance => &mut self.distance,
        }
    }

    /// Submits the session's counters under `name`. Nameless sessions
    /// record nothing.
    pub fn fold_session(&mut self, name: &str, stats: &SessionStats, time: u64) -> bool {
        if name.is_empty() {
            return false;
        }
        let mut changed = self.mosquitoes.submit(name, stats.mosquitoes_swatted as u64, time);
        changed |= self.campfire.submit(name, stats.campfire_ticks as u64, time);
        changed |= self.distance.submit(name, stats.distance, time);
        changed
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FILE FORMAT
// ═══════════════════════════════════════════════════════════════════════

/// Splits off the last whitespace-delimited token.
fn split_last_token(text: &str) -> Option<(&str, &str)> {
    let at = text.rfind(char::is_whitespace)?;
    let (head, tail) = text.split_at(at);
    Some((head.trim_end(), tail.trim_start()))
}

/// Parses `name value epochMillis`; the name may contain spaces.
pub fn parse_score_line(line: &str) -> Result<Score, String> {
    let (rest, time) =
        split_last_token(line.trim()).ok_or_else(|| format!("missing fields in {:?}", line))?;
    let (name, value) =
        split_last_token(rest).ok_or_else(|| format!("missing score in {:?}", line))?;
    if name.is_empty() {
        return Err(format!("missing name in {:?}", line));
    }
    let value = value
        .parse::<u64>()
        .map_err(|e| format!("bad score {:?}: {}", value, e))?;
    let time = time
        .parse::<u64>()
        .map_err(|e| format!("bad timestamp {:?}: {}", time, e))?;
    Ok(Score {
        name: name.to_string(),
        value,
        time,
    })
}

/// Parses a whole score file. Every blank line closes the current stanza;
/// malformed records are skipped with a warning.
pub fn parse_ledger(text: &str) -> ScoreLedger {
    let mut ledger = ScoreLedger::default();
    let mut stanza = 0;
    for (number, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            stanza += 1;
            continue;
        }
        let Some(&category) = ScoreCategory::ALL.get(stanza) else {
            warn!("[Scores] Ignoring line {} past the last stanza", number + 1);
            continue;
        };
        match parse_score_line(line) {
            Ok(score) => {
                ledger
                    .board_mut(category)
                    .submit(&score.name, score.value, score.time);
            }
            Err(e) => warn!("[Scores] Skipping line {}: {}", number + 1, e),
        }
    }
    ledger
}

/// Renders the ledger in the form `parse_ledger` reads.
pub fn render_ledger(ledger: &ScoreLedger) -> String {
    let mut out = String::new();
    for category in ScoreCategory::ALL {
        for score in ledger.board(category).iter() {
            out.push_str(&format!("{} {} {}\n", score.name, score.value, score.time));
        }
        out.push('\n');
    }
    out
}

/// Reads a score file. A missing file is an empty ledger.
pub fn load_ledger(path: &Path) -> Result<ScoreLedger, String> {
    if !path.exists() {
        return Ok(ScoreLedger::default());
    }
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    Ok(parse_ledger(&text))
}

/// Writes the ledger through a temp file renamed over the target.
pub fn save_ledger(ledger: &ScoreLedger, path: &Path) -> Result<(), String> {
    let tmp_path = path.with_extension("txt.tmp");
    fs::write(&tmp_path, render_ledger(ledger))
        .map_err(|e| format!("Write failed for {}: {}", tmp_path.display(), e))?;
    fs::rename(&tmp_path, path).map_err(|e| format!("Rename failed: {}", e))?;
    Ok(())
}
