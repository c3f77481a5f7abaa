use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::hole::{FieldChange, HoleEntry, HolePhase, HoleState, reduce};
use super::totals::round_totals;
use crate::error::CoreError;
use crate::model::{Course, HoleScore, Round, RoundSummary, new_round_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleSelection {
    /// Every hole on the course.
    All,
    /// Holes 1-9 of an 18-hole course.
    Front,
    /// Holes 10-18 of an 18-hole course.
    Back,
}

/// One in-progress hole-by-hole round entry.
#[derive(Debug, Clone)]
pub struct HoleEntryModel {
    pub golfer_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub course: Course,
    pub holes: BTreeMap<u8, HoleState>,
    pub totals: RoundSummary,
    pub saved_round: Option<Round>,
    pub complementary_nine: Option<Round>,
    pub error: Option<CoreError>,
}

impl HoleEntryModel {
    /// # Errors
    ///
    /// Will return `Err` if the course has no hole layout or the selection
    /// does not fit the course.
    pub fn new(course: &Course, selection: HoleSelection) -> Result<Self, CoreError> {
        if course.holes.is_empty() {
            return Err(CoreError::Validation(format!(
                "course {} has no hole layout",
                course.id
            )));
        }
        let range = match (selection, course.hole_count) {
            (HoleSelection::All, count) => 1..=count,
            (HoleSelection::Front, _) => 1..=9,
            (HoleSelection::Back, 18) => 10..=18,
            (HoleSelection::Back, _) => {
                return Err(CoreError::Validation(format!(
                    "course {} has no back nine",
                    course.id
                )));
            }
        };

        let holes = course
            .holes
            .iter()
            .filter(|h| range.contains(&h.number))
            .map(|h| (h.number, HoleState::pending(h)))
            .collect();

        let mut model = Self {
            golfer_id: None,
            date: None,
            course: course.clone(),
            holes,
            totals: RoundSummary::default(),
            saved_round: None,
            complementary_nine: None,
            error: None,
        };
        model.totals = model.compute_totals();
        Ok(model)
    }

    #[must_use]
    pub fn selected_holes(&self) -> Vec<u8> {
        self.holes.keys().copied().collect()
    }

    /// Hole scores for every hole with a score, in hole order.
    #[must_use]
    pub fn entered_hole_scores(&self, round_id: &str) -> Vec<HoleScore> {
        self.holes
            .values()
            .filter_map(|h| h.to_hole_score(round_id))
            .collect()
    }

    /// Running totals while entering. Strokes and hits count the holes entered
    /// so far; fairway and GIR opportunities count every selected hole.
    #[must_use]
    pub fn compute_totals(&self) -> RoundSummary {
        let mut totals = round_totals(&self.course, &self.entered_hole_scores(""));
        let fairway_holes = self.holes.values().filter(|h| h.has_fairway()).count();
        totals.fairways_total = i32::try_from(fairway_holes).unwrap_or(i32::MAX);
        totals.gir_total = i32::try_from(self.holes.len()).unwrap_or(i32::MAX);
        totals
    }

    /// Builds the round record and its hole scores. The differential is left
    /// to the repository.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the golfer or date is missing or no hole has a score.
    pub fn build_round(&self, round_id: &str) -> Result<(Round, Vec<HoleScore>), CoreError> {
        let (Some(golfer_id), Some(date)) = (self.golfer_id.as_ref(), self.date) else {
            return Err(CoreError::Validation(
                "date, golfer, and course are required".to_string(),
            ));
        };
        let hole_scores = self.entered_hole_scores(round_id);
        if hole_scores.is_empty() {
            return Err(CoreError::Validation(
                "enter a score for at least one hole".to_string(),
            ));
        }

        let totals = round_totals(&self.course, &hole_scores);
        let mut round = Round::new(
            round_id,
            golfer_id.clone(),
            self.course.id.clone(),
            date,
            totals.total_score,
            totals.holes_entered,
        );
        round.putts = (totals.total_putts > 0).then_some(totals.total_putts);
        round.fairways_hit = (totals.fairways_total > 0).then_some(totals.fairways_hit);
        round.greens_in_regulation = (totals.gir_total > 0).then_some(totals.gir_hit);
        round.nine_played = totals.nine_played;
        round.notes = Some(format!(
            "Hole-by-hole entry for {} holes",
            totals.holes_entered
        ));
        Ok((round, hole_scores))
    }

    fn reset_holes(&mut self) {
        for state in self.holes.values_mut() {
            *state = HoleState {
                number: state.number,
                par: state.par,
                phase: HolePhase::Pending,
                entry: HoleEntry::default(),
                summary: None,
            };
        }
        self.totals = self.compute_totals();
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    SetGolfer(String),
    SetDate(NaiveDate),
    Edit { hole: u8, change: FieldChange },
    HoleSummarized(HoleState),
    TotalsComputed(RoundSummary),
    Save { round_id: String },
    /// Save under a generated id.
    SaveNew,
    Saved(Round),
    ComplementaryNineFound(Option<Round>),
    Clear,
    Failed(CoreError),
}

#[derive(Debug, Clone)]
pub enum Effect {
    Summarize(u8),
    RecomputeTotals,
    PersistRound {
        round: Round,
        hole_scores: Vec<HoleScore>,
    },
    FindComplementaryNine(Round),
}

pub fn update(model: &mut HoleEntryModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::SetGolfer(golfer_id) => {
            model.golfer_id = Some(golfer_id);
            vec![]
        }
        Msg::SetDate(date) => {
            model.date = Some(date);
            vec![]
        }
        Msg::Edit { hole, change } => {
            let Some(state) = model.holes.get(&hole) else {
                model.error = Some(CoreError::NotFound(format!(
                    "hole {hole} is not part of this entry"
                )));
                return vec![];
            };
            let next = reduce(state, change);
            model.holes.insert(hole, next);
            model.error = None;
            vec![Effect::Summarize(hole), Effect::RecomputeTotals]
        }
        Msg::HoleSummarized(state) => {
            model.holes.insert(state.number, state);
            vec![]
        }
        Msg::TotalsComputed(totals) => {
            model.totals = totals;
            vec![]
        }
        Msg::Save { round_id } => match model.build_round(&round_id) {
            Ok((round, hole_scores)) => vec![Effect::PersistRound { round, hole_scores }],
            Err(e) => {
                model.error = Some(e);
                vec![]
            }
        },
        Msg::SaveNew => update(
            model,
            Msg::Save {
                round_id: new_round_id(),
            },
        ),
        Msg::Saved(round) => {
            model.reset_holes();
            model.error = None;
            let effects = if round.is_nine_hole() && round.nine_played.is_some() {
                vec![Effect::FindComplementaryNine(round.clone())]
            } else {
                vec![]
            };
            model.saved_round = Some(round);
            effects
        }
        Msg::ComplementaryNineFound(found) => {
            model.complementary_nine = found;
            vec![]
        }
        Msg::Clear => {
            model.reset_holes();
            model.golfer_id = None;
            model.saved_round = None;
            model.complementary_nine = None;
            model.error = None;
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}
