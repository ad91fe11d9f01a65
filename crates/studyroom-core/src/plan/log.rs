//! Study log: recording actual hours against a plan.
//!
//! Edits go into an [`ActualsDraft`] first and reach the plan only through
//! one explicit commit, which overwrites every entry at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::StudyPlan;

/// Actual hours keyed by subject position in the plan.
pub type ActualEntries = BTreeMap<usize, f64>;

impl StudyPlan {
    /// Overwrite `actual_hours` for every subject index present in `entries`.
    ///
    /// Returns the number of subjects updated. Indices past the end of the
    /// plan are ignored.
    pub fn record_actual(&mut self, entries: &ActualEntries) -> usize {
        let mut updated = 0;
        for (&index, &hours) in entries {
            match self.subjects.get_mut(index) {
                Some(subject) => {
                    subject.actual_hours = hours;
                    updated += 1;
                }
                None => {
                    tracing::warn!(
                        index,
                        len = self.subjects.len(),
                        "ignoring actual hours for unknown subject"
                    );
                }
            }
        }
        tracing::debug!(updated, "actual hours recorded");
        updated
    }
}

/// Pending, uncommitted edits of actual hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActualsDraft {
    values: ActualEntries,
}

impl ActualsDraft {
    /// Seed a draft with the plan's current actual hours.
    pub fn for_plan(plan: &StudyPlan) -> Self {
        Self {
            values: plan
                .subjects
                .iter()
                .enumerate()
                .map(|(i, s)| (i, s.actual_hours))
                .collect(),
        }
    }

    pub fn set(&mut self, index: usize, hours: f64) {
        self.values.insert(index, hours);
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(&index).copied()
    }

    pub fn entries(&self) -> &ActualEntries {
        &self.values
    }

    /// Apply every pending value to `plan` in one step.
    pub fn commit(&self, plan: &mut StudyPlan) -> usize {
        plan.record_actual(&self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::generate;

    #[test]
    fn record_overwrites_present_indices() {
        let mut plan = generate(&["Math", "English", "Science"], 6.0).unwrap();
        let entries = ActualEntries::from([(0, 1.0), (2, 2.75)]);
        assert_eq!(plan.record_actual(&entries), 2);
        assert_eq!(plan.subjects[0].actual_hours, 1.0);
        assert_eq!(plan.subjects[1].actual_hours, 0.0);
        assert_eq!(plan.subjects[2].actual_hours, 2.75);

        let entries = ActualEntries::from([(0, 0.5)]);
        plan.record_actual(&entries);
        assert_eq!(plan.subjects[0].actual_hours, 0.5);
    }

    #[test]
    fn record_ignores_unknown_index() {
        let mut plan = generate(&["Math"], 2.0).unwrap();
        let entries = ActualEntries::from([(5, 3.0)]);
        assert_eq!(plan.record_actual(&entries), 0);
        assert_eq!(plan.subjects[0].actual_hours, 0.0);
    }

    #[test]
    fn draft_edits_do_not_touch_plan_until_commit() {
        let mut plan = generate(&["Math", "English"], 4.0).unwrap();
        let mut draft = ActualsDraft::for_plan(&plan);
        draft.set(0, 1.0);
        draft.set(1, 3.0);
        assert_eq!(plan.total_actual(), 0.0);

        assert_eq!(draft.commit(&mut plan), 2);
        assert_eq!(plan.subjects[0].actual_hours, 1.0);
        assert_eq!(plan.subjects[1].actual_hours, 3.0);
    }

    #[test]
    fn draft_is_seeded_from_plan() {
        let mut plan = generate(&["Math", "English"], 4.0).unwrap();
        plan.record_actual(&ActualEntries::from([(1, 2.5)]));
        let draft = ActualsDraft::for_plan(&plan);
        assert_eq!(draft.get(0), Some(0.0));
        assert_eq!(draft.get(1), Some(2.5));
        assert_eq!(draft.get(2), None);
    }
}
