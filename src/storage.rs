use ahash::RandomState;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::CoreError;
use crate::model::{Course, Golfer, HoleScore, NinePlayed, Round};
use crate::mvu::derive_nine_played;
use crate::score::{calculate_differential, merge_nine_rounds};

/// Read-only view of the records the rating engine works from.
pub trait RoundStore {
    fn list_golfers(&self) -> Vec<Golfer>;
    /// All rounds, or one golfer's rounds, in insertion order.
    fn list_rounds(&self, golfer_id: Option<&str>) -> Vec<Round>;
    fn get_course(&self, course_id: &str) -> Option<Course>;
    /// Hole scores for a round, ordered by hole number.
    fn list_hole_scores(&self, round_id: &str) -> Vec<HoleScore>;
    /// A saved 9-hole round by the same golfer on the same course and date
    /// covering the other nine.
    fn find_complementary_nine(
        &self,
        golfer_id: &str,
        course_id: &str,
        date: NaiveDate,
        nine: NinePlayed,
    ) -> Option<Round>;
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub golfers: Vec<Golfer>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub hole_scores: Vec<HoleScore>,
}

/// Owned in-memory store. The single writer; the engine only reads it.
#[derive(Clone, Debug, Default)]
pub struct Repository {
    data: Snapshot,
    config: EngineConfig,
}

impl Repository {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            data: Snapshot::default(),
            config,
        }
    }

    /// Loads a snapshot, validating courses and refreshing every stored differential.
    ///
    /// # Errors
    ///
    /// Will return `Err` if a course or round fails validation, ids are duplicated,
    /// or a round's hole scores do not add up to it.
    pub fn from_snapshot(snapshot: Snapshot, config: EngineConfig) -> Result<Self, CoreError> {
        let mut repo = Self::new(config);
        for golfer in snapshot.golfers {
            repo.add_golfer(golfer)?;
        }
        for course in snapshot.courses {
            repo.add_course(course)?;
        }
        for round in snapshot.rounds {
            repo.add_round(round)?;
        }
        for hole_score in snapshot.hole_scores {
            if repo.round(&hole_score.round_id).is_none() {
                return Err(CoreError::NotFound(format!(
                    "round {} for hole score",
                    hole_score.round_id
                )));
            }
            repo.data.hole_scores.push(hole_score);
        }

        let mut by_round: HashMap<&str, Vec<&HoleScore>, RandomState> = HashMap::default();
        for hole in &repo.data.hole_scores {
            by_round.entry(hole.round_id.as_str()).or_default().push(hole);
        }
        for (round_id, holes) in &by_round {
            if let Some(round) = repo.round(round_id) {
                check_hole_set(round, holes.iter().copied())?;
            }
        }
        info!(
            golfers = repo.data.golfers.len(),
            courses = repo.data.courses.len(),
            rounds = repo.data.rounds.len(),
            "snapshot loaded"
        );
        Ok(repo)
    }

    /// # Errors
    ///
    /// Will return `Err` if the json is malformed or the snapshot fails validation.
    pub fn from_json_str(json: &str, config: EngineConfig) -> Result<Self, CoreError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot, config)
    }

    /// # Errors
    ///
    /// Will return `Err` if serialization fails.
    pub fn to_json_string(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(&self.data)?)
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.data
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn golfer(&self, golfer_id: &str) -> Option<&Golfer> {
        self.data.golfers.iter().find(|g| g.id == golfer_id)
    }

    #[must_use]
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.data.courses.iter().find(|c| c.id == course_id)
    }

    #[must_use]
    pub fn round(&self, round_id: &str) -> Option<&Round> {
        self.data.rounds.iter().find(|r| r.id == round_id)
    }

    /// # Errors
    ///
    /// Will return `Err` if the id is already taken.
    pub fn add_golfer(&mut self, golfer: Golfer) -> Result<(), CoreError> {
        if self.golfer(&golfer.id).is_some() {
            return Err(CoreError::Validation(format!(
                "golfer {} already exists",
                golfer.id
            )));
        }
        debug!(golfer = %golfer.id, "golfer added");
        self.data.golfers.push(golfer);
        Ok(())
    }

    /// Removes a golfer along with their rounds and those rounds' hole scores.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the golfer does not exist.
    pub fn delete_golfer(&mut self, golfer_id: &str) -> Result<(), CoreError> {
        if self.golfer(golfer_id).is_none() {
            return Err(CoreError::NotFound(format!("golfer {golfer_id}")));
        }
        let round_ids: HashSet<String> = self
            .data
            .rounds
            .iter()
            .filter(|r| r.golfer_id == golfer_id)
            .map(|r| r.id.clone())
            .collect();

        self.data.golfers.retain(|g| g.id != golfer_id);
        self.data.rounds.retain(|r| !round_ids.contains(&r.id));
        self.data
            .hole_scores
            .retain(|h| !round_ids.contains(&h.round_id));
        info!(golfer = %golfer_id, rounds = round_ids.len(), "golfer deleted");
        Ok(())
    }

    /// Adds a course. `total_par` is taken from the hole layout when one is given.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the id is taken or the layout is inconsistent.
    pub fn add_course(&mut self, mut course: Course) -> Result<(), CoreError> {
        if self.course(&course.id).is_some() {
            return Err(CoreError::Validation(format!(
                "course {} already exists",
                course.id
            )));
        }
        course.validate()?;
        if !course.holes.is_empty() {
            course.holes.sort_by_key(|h| h.number);
            course.total_par = course.computed_total_par();
        }

        // rounds left behind by an earlier delete of this id
        let mut refreshed = 0;
        for round in self
            .data
            .rounds
            .iter_mut()
            .filter(|r| r.course_id == course.id)
        {
            round.differential = calculate_differential(round, &course, &self.config);
            refreshed += 1;
        }
        debug!(course = %course.id, refreshed, "course added");
        self.data.courses.push(course);
        Ok(())
    }

    /// Removes a course. Rounds keep their weak reference and simply stop
    /// carrying a differential.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the course does not exist.
    pub fn delete_course(&mut self, course_id: &str) -> Result<(), CoreError> {
        if self.course(course_id).is_none() {
            return Err(CoreError::NotFound(format!("course {course_id}")));
        }
        self.data.courses.retain(|c| c.id != course_id);
        for round in self
            .data
            .rounds
            .iter_mut()
            .filter(|r| r.course_id == course_id)
        {
            round.differential = None;
        }
        info!(course = %course_id, "course deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the id is taken, the golfer is unknown, or the
    /// fairway / GIR counts exceed their opportunities.
    pub fn add_round(&mut self, mut round: Round) -> Result<(), CoreError> {
        if self.round(&round.id).is_some() {
            return Err(CoreError::Validation(format!(
                "round {} already exists",
                round.id
            )));
        }
        self.prepare_round(&mut round)?;
        debug!(round = %round.id, differential = ?round.differential, "round added");
        self.data.rounds.push(round);
        Ok(())
    }

    /// Replaces a stored round, re-deriving its differential. When the round
    /// has hole scores the totals stay tied to them.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the round does not exist or fails validation.
    pub fn update_round(&mut self, mut round: Round) -> Result<(), CoreError> {
        let Some(pos) = self.data.rounds.iter().position(|r| r.id == round.id) else {
            return Err(CoreError::NotFound(format!("round {}", round.id)));
        };
        let holes = self.list_hole_scores(&round.id);
        if !holes.is_empty() {
            round.score = holes.iter().map(|h| h.score).sum();
            round.holes_played = u8::try_from(holes.len()).unwrap_or(u8::MAX);
            if let Some(course) = self.course(&round.course_id) {
                let numbers: Vec<u8> = holes.iter().map(|h| h.hole_number).collect();
                round.nine_played = derive_nine_played(course.hole_count, &numbers);
            }
        }
        self.prepare_round(&mut round)?;
        debug!(round = %round.id, differential = ?round.differential, "round updated");
        self.data.rounds[pos] = round;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the round does not exist.
    pub fn delete_round(&mut self, round_id: &str) -> Result<(), CoreError> {
        if self.round(round_id).is_none() {
            return Err(CoreError::NotFound(format!("round {round_id}")));
        }
        self.data.rounds.retain(|r| r.id != round_id);
        self.data.hole_scores.retain(|h| h.round_id != round_id);
        debug!(round = %round_id, "round deleted");
        Ok(())
    }

    /// Stores a round built from hole-by-hole entry together with its holes.
    /// Nothing is written if any part fails validation.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the round is invalid or the holes do not add up to it.
    pub fn save_hole_round(
        &mut self,
        round: Round,
        hole_scores: Vec<HoleScore>,
    ) -> Result<(), CoreError> {
        check_hole_set(&round, &hole_scores)?;
        let round_id = round.id.clone();
        self.add_round(round)?;
        self.data.hole_scores.extend(hole_scores);
        info!(round = %round_id, "hole-by-hole round saved");
        Ok(())
    }

    /// Replaces a front and a back nine with one 18-hole-equivalent round.
    /// Hole scores move to the new round.
    ///
    /// # Errors
    ///
    /// Will return `Err` if either round is missing, the two are not
    /// complementary nines of the same golfer, course and date, or only one
    /// of them was entered hole by hole.
    pub fn merge_nines(
        &mut self,
        first_id: &str,
        second_id: &str,
        merged_id: &str,
    ) -> Result<Round, CoreError> {
        let first = self
            .round(first_id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("round {first_id}")))?;
        let second = self
            .round(second_id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("round {second_id}")))?;

        let first_has_holes = !self.list_hole_scores(first_id).is_empty();
        let second_has_holes = !self.list_hole_scores(second_id).is_empty();
        if first_has_holes != second_has_holes {
            return Err(CoreError::Validation(format!(
                "rounds {first_id} and {second_id} cannot be merged: only one has hole scores"
            )));
        }

        let merged = merge_nine_rounds(&first, &second, merged_id)?;
        self.add_round(merged)?;

        for hole in self
            .data
            .hole_scores
            .iter_mut()
            .filter(|h| h.round_id == first_id || h.round_id == second_id)
        {
            hole.round_id = merged_id.to_string();
        }
        self.data
            .rounds
            .retain(|r| r.id != first_id && r.id != second_id);
        info!(merged = %merged_id, front_or_back = %first_id, other = %second_id, "nines merged");

        self.round(merged_id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("round {merged_id}")))
    }

    fn prepare_round(&self, round: &mut Round) -> Result<(), CoreError> {
        if self.golfer(&round.golfer_id).is_none() {
            return Err(CoreError::NotFound(format!("golfer {}", round.golfer_id)));
        }
        if round.holes_played == 0 || round.holes_played > 18 {
            return Err(CoreError::Validation(format!(
                "round {} has {} holes played",
                round.id, round.holes_played
            )));
        }
        if let Some(gir) = round.greens_in_regulation {
            if gir < 0 || gir > i32::from(round.holes_played) {
                return Err(CoreError::Validation(format!(
                    "round {} has {gir} greens in regulation over {} holes",
                    round.id, round.holes_played
                )));
            }
        }

        let course = self.course(&round.course_id);
        if let (Some(course), Some(fairways)) = (course, round.fairways_hit) {
            let limit = course
                .fairway_opportunities(round)
                .unwrap_or(i32::from(round.holes_played));
            if fairways < 0 || fairways > limit {
                return Err(CoreError::Validation(format!(
                    "round {} has {fairways} fairways hit with {limit} opportunities",
                    round.id
                )));
            }
        }
        round.differential =
            course.and_then(|course| calculate_differential(round, course, &self.config));
        Ok(())
    }
}

/// A round's hole scores must belong to it, cover distinct holes, and add up
/// to its score and hole count.
fn check_hole_set<'a>(
    round: &Round,
    holes: impl IntoIterator<Item = &'a HoleScore>,
) -> Result<(), CoreError> {
    let mut numbers = HashSet::new();
    let mut total = 0;
    for hole in holes {
        if hole.round_id != round.id {
            return Err(CoreError::Validation(format!(
                "hole scores do not belong to round {}",
                round.id
            )));
        }
        if !numbers.insert(hole.hole_number) {
            return Err(CoreError::Validation(format!(
                "round {} has hole {} scored twice",
                round.id, hole.hole_number
            )));
        }
        total += hole.score;
    }
    if total != round.score || numbers.len() != usize::from(round.holes_played) {
        return Err(CoreError::Validation(format!(
            "round {} totals do not match its {} hole scores",
            round.id,
            numbers.len()
        )));
    }
    Ok(())
}

impl RoundStore for Repository {
    fn list_golfers(&self) -> Vec<Golfer> {
        self.data.golfers.clone()
    }

    fn list_rounds(&self, golfer_id: Option<&str>) -> Vec<Round> {
        self.data
            .rounds
            .iter()
            .filter(|r| golfer_id.is_none_or(|id| r.golfer_id == id))
            .cloned()
            .collect()
    }

    fn get_course(&self, course_id: &str) -> Option<Course> {
        self.course(course_id).cloned()
    }

    fn list_hole_scores(&self, round_id: &str) -> Vec<HoleScore> {
        let mut holes: Vec<HoleScore> = self
            .data
            .hole_scores
            .iter()
            .filter(|h| h.round_id == round_id)
            .cloned()
            .collect();
        holes.sort_by_key(|h| h.hole_number);
        holes
    }

    fn find_complementary_nine(
        &self,
        golfer_id: &str,
        course_id: &str,
        date: NaiveDate,
        nine: NinePlayed,
    ) -> Option<Round> {
        let wanted = nine.complement()?;
        self.data
            .rounds
            .iter()
            .find(|r| {
                r.golfer_id == golfer_id
                    && r.course_id == course_id
                    && r.date == date
                    && r.is_nine_hole()
                    && !r.is_eighteen_equivalent
                    && r.nine_played == Some(wanted)
            })
            .cloned()
    }
}
