use serde::{Deserialize, Serialize};

use crate::model::{Hole, HoleScore, MissDirection, ScoreResult};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HolePhase {
    /// No score recorded yet.
    Pending,
    /// Score recorded, summary not yet derived from the latest edit.
    Entered,
    Summarized,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HoleEntry {
    pub score: Option<i32>,
    pub putts: Option<i32>,
    pub fairway_hit: Option<bool>,
    pub miss_direction: Option<MissDirection>,
    pub green_in_regulation: bool,
    pub sand_save: bool,
    pub chip_in: bool,
    pub penalty_strokes: i32,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoleSummary {
    pub score_to_par: i32,
    pub result: ScoreResult,
    pub indicators: Vec<String>,
    pub text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoleState {
    pub number: u8,
    pub par: i32,
    pub phase: HolePhase,
    pub entry: HoleEntry,
    pub summary: Option<HoleSummary>,
}

/// A single edit from the entry surface.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum FieldChange {
    Score(Option<i32>),
    Putts(Option<i32>),
    FairwayHit(Option<bool>),
    MissDirection(Option<MissDirection>),
    GreenInRegulation(bool),
    SandSave(bool),
    ChipIn(bool),
    PenaltyStrokes(i32),
    Notes(String),
}

impl From<&HoleScore> for HoleEntry {
    fn from(hole: &HoleScore) -> Self {
        Self {
            score: Some(hole.score),
            putts: hole.putts,
            fairway_hit: hole.fairway_hit,
            miss_direction: hole.fairway_miss_direction,
            green_in_regulation: hole.green_in_regulation,
            sand_save: hole.sand_save,
            chip_in: hole.chip_in,
            penalty_strokes: hole.penalty_strokes,
            notes: hole.notes.clone(),
        }
    }
}

impl HoleState {
    #[must_use]
    pub fn pending(hole: &Hole) -> Self {
        Self {
            number: hole.number,
            par: hole.par,
            phase: HolePhase::Pending,
            entry: HoleEntry::default(),
            summary: None,
        }
    }

    #[must_use]
    pub fn has_fairway(&self) -> bool {
        self.par >= 4
    }

    #[must_use]
    pub fn is_entered(&self) -> bool {
        self.entry.score.is_some()
    }

    /// Score and putts both present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entry.score.is_some() && self.entry.putts.is_some()
    }

    /// `putts` of zero is stored as absent.
    #[must_use]
    pub fn to_hole_score(&self, round_id: &str) -> Option<HoleScore> {
        let score = self.entry.score?;
        Some(HoleScore {
            round_id: round_id.to_string(),
            hole_number: self.number,
            score,
            putts: self.entry.putts.filter(|p| *p > 0),
            fairway_hit: self.entry.fairway_hit,
            fairway_miss_direction: self.entry.miss_direction,
            green_in_regulation: self.entry.green_in_regulation,
            sand_save: self.entry.sand_save,
            chip_in: self.entry.chip_in,
            penalty_strokes: self.entry.penalty_strokes,
            notes: self.entry.notes.clone(),
        })
    }
}

/// Applies one field change. The result is `Pending` without a score and
/// `Entered` with one; the previous summary is dropped either way.
#[must_use]
pub fn reduce(state: &HoleState, change: FieldChange) -> HoleState {
    let mut next = state.clone();
    let entry = &mut next.entry;
    match change {
        FieldChange::Score(score) => entry.score = score.filter(|s| *s > 0),
        FieldChange::Putts(putts) => entry.putts = putts.filter(|p| *p >= 0),
        FieldChange::FairwayHit(hit) => {
            if state.has_fairway() {
                entry.fairway_hit = hit;
                if hit == Some(true) {
                    entry.miss_direction = None;
                }
            }
        }
        FieldChange::MissDirection(direction) => {
            if state.has_fairway() {
                entry.miss_direction = direction;
            }
        }
        FieldChange::GreenInRegulation(gir) => entry.green_in_regulation = gir,
        FieldChange::SandSave(sand) => entry.sand_save = sand,
        FieldChange::ChipIn(chip) => entry.chip_in = chip,
        FieldChange::PenaltyStrokes(penalty) => entry.penalty_strokes = penalty.max(0),
        FieldChange::Notes(notes) => {
            let trimmed = notes.trim();
            entry.notes = (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
    }

    next.summary = None;
    next.phase = if next.is_entered() {
        HolePhase::Entered
    } else {
        HolePhase::Pending
    };
    next
}

/// Moves an entered hole to `Summarized`. Pending holes come back unchanged.
#[must_use]
pub fn summarize(state: &HoleState) -> HoleState {
    let mut next = state.clone();
    match hole_summary(&state.entry, state.par) {
        Some(summary) => {
            next.summary = Some(summary);
            next.phase = HolePhase::Summarized;
        }
        None => {
            next.summary = None;
            next.phase = HolePhase::Pending;
        }
    }
    next
}

#[must_use]
pub fn indicators(entry: &HoleEntry) -> Vec<String> {
    let mut out = Vec::new();
    if entry.green_in_regulation {
        out.push("GIR".to_string());
    }
    if entry.sand_save {
        out.push("Sand Save".to_string());
    }
    if entry.chip_in {
        out.push("Chip In".to_string());
    }
    if entry.penalty_strokes > 0 {
        out.push(format!("{} Penalty", entry.penalty_strokes));
    }
    out
}

/// `Score: 5 | Putts: 2 | Result: Bogey | GIR, 1 Penalty`
#[must_use]
pub fn summary_text(score: i32, putts: i32, result: ScoreResult, indicators: &[String]) -> String {
    let mut text = format!("Score: {score} | Putts: {putts} | Result: {result}");
    if !indicators.is_empty() {
        text.push_str(" | ");
        text.push_str(&indicators.join(", "));
    }
    text
}

#[must_use]
pub fn hole_summary(entry: &HoleEntry, par: i32) -> Option<HoleSummary> {
    let score = entry.score?;
    let score_to_par = score - par;
    let result = ScoreResult::from_score_to_par(score_to_par);
    let indicators = indicators(entry);
    let text = summary_text(score, entry.putts.unwrap_or(0), result, &indicators);
    Some(HoleSummary {
        score_to_par,
        result,
        indicators,
        text,
    })
}
