//! Lead auto-assignment
//!
//! Decides which caller receives the next lead. The rotation cursor
//! (`last_assigned_caller_id`) flows in through the settings and out through
//! [`AssignmentDecision::cursor`]; persisting it is the caller's job.

use serde::{Deserialize, Serialize};
use shared::{AssignmentResult, AssignmentSettings, Caller, CallerId};

/// Outcome of a successful selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDecision {
    pub assignee: AssignmentResult,
    /// New rotation cursor. Only set for a round-robin pick.
    pub cursor: Option<CallerId>,
}

impl AssignmentDecision {
    /// Write the new cursor into the settings document, if this pick moved it
    pub fn apply_to(&self, settings: &mut AssignmentSettings) -> bool {
        match self.cursor {
            Some(cursor) => {
                settings.last_assigned_caller_id = Some(cursor);
                true
            }
            None => false,
        }
    }
}

/// Filter a caller list down to the rotation pool, ordered by ascending id
pub fn eligible_callers<'a, I>(callers: I) -> Vec<Caller>
where
    I: IntoIterator<Item = &'a Caller>,
{
    let mut pool: Vec<Caller> = callers
        .into_iter()
        .filter(|caller| caller.is_assignable())
        .cloned()
        .collect();
    pool.sort_by_key(|caller| caller.id);
    pool
}

/// Pick the assignee for one incoming lead.
///
/// `active_callers` must already be the rotation pool (see [`eligible_callers`]).
/// A cursor that no longer matches any caller in the pool restarts the
/// rotation at index 0.
pub fn select_assignee(
    active_callers: &[Caller],
    settings: &AssignmentSettings,
) -> Option<AssignmentDecision> {
    if !settings.auto_assign {
        return None;
    }

    let first = active_callers.first()?;

    // Single assignment mode always targets the first caller and leaves the cursor alone
    if !settings.round_robin || active_callers.len() == 1 {
        return Some(AssignmentDecision {
            assignee: first.into(),
            cursor: None,
        });
    }

    let next_index = match settings.last_assigned_caller_id {
        None => 0,
        Some(last) => match active_callers.iter().position(|caller| caller.id == last) {
            Some(index) if index + 1 < active_callers.len() => index + 1,
            _ => 0,
        },
    };

    let selected = &active_callers[next_index];
    Some(AssignmentDecision {
        assignee: selected.into(),
        cursor: Some(selected.id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CallerStatus, Role};

    fn caller(id: u64, name: &str) -> Caller {
        Caller {
            id: CallerId(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: Role::Caller,
            status: CallerStatus::Active,
        }
    }

    fn pool() -> Vec<Caller> {
        vec![caller(1, "A"), caller(2, "B"), caller(3, "C")]
    }

    fn round_robin(cursor: Option<u64>) -> AssignmentSettings {
        AssignmentSettings {
            auto_assign: true,
            round_robin: true,
            last_assigned_caller_id: cursor.map(CallerId),
        }
    }

    #[test]
    fn test_disabled_auto_assign_returns_none() {
        let settings = AssignmentSettings {
            auto_assign: false,
            round_robin: true,
            last_assigned_caller_id: Some(CallerId(1)),
        };

        assert_eq!(select_assignee(&pool(), &settings), None);
        assert_eq!(select_assignee(&[], &settings), None);
    }

    #[test]
    fn test_empty_pool_returns_none() {
        assert_eq!(select_assignee(&[], &round_robin(None)), None);
    }

    #[test]
    fn test_single_mode_always_picks_first_without_cursor() {
        let mut settings = AssignmentSettings {
            auto_assign: true,
            round_robin: false,
            last_assigned_caller_id: Some(CallerId(2)),
        };

        for _ in 0..3 {
            let decision = select_assignee(&pool(), &settings).unwrap();
            assert_eq!(decision.assignee.caller_id, CallerId(1));
            assert_eq!(decision.cursor, None);
            assert!(!decision.apply_to(&mut settings));
        }
        assert_eq!(settings.last_assigned_caller_id, Some(CallerId(2)));
    }

    #[test]
    fn test_single_caller_pool_does_not_rotate() {
        let decision = select_assignee(&[caller(5, "Solo")], &round_robin(Some(5))).unwrap();

        assert_eq!(decision.assignee.caller_id, CallerId(5));
        assert_eq!(decision.cursor, None);
    }

    #[test]
    fn test_round_robin_without_cursor_starts_at_first() {
        let decision = select_assignee(&pool(), &round_robin(None)).unwrap();

        assert_eq!(decision.assignee.caller_id, CallerId(1));
        assert_eq!(decision.cursor, Some(CallerId(1)));
    }

    #[test]
    fn test_round_robin_advances_one_position() {
        let decision = select_assignee(&pool(), &round_robin(Some(1))).unwrap();

        assert_eq!(decision.assignee.caller_id, CallerId(2));
        assert_eq!(decision.assignee.caller_name, "B");
        assert_eq!(decision.assignee.caller_email, "b@example.com");
        assert_eq!(decision.cursor, Some(CallerId(2)));
    }

    #[test]
    fn test_round_robin_wraps_after_last() {
        let decision = select_assignee(&pool(), &round_robin(Some(3))).unwrap();
        assert_eq!(decision.assignee.caller_id, CallerId(1));
    }

    #[test]
    fn test_stale_cursor_restarts_rotation() {
        let decision = select_assignee(&pool(), &round_robin(Some(42))).unwrap();
        assert_eq!(decision.assignee.caller_id, CallerId(1));
        assert_eq!(decision.cursor, Some(CallerId(1)));
    }

    #[test]
    fn test_full_rotation_sequence() {
        let callers = pool();
        let mut settings = round_robin(None);
        let mut picked = Vec::new();

        for _ in 0..7 {
            let decision = select_assignee(&callers, &settings).unwrap();
            assert!(decision.apply_to(&mut settings));
            picked.push(decision.assignee.caller_id.0);
        }

        assert_eq!(picked, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_deactivated_caller_drops_out_mid_rotation() {
        let mut settings = round_robin(Some(2));
        let mut callers = pool();
        callers[1].status = CallerStatus::Inactive;

        let active = eligible_callers(&callers);
        let decision = select_assignee(&active, &settings).unwrap();
        decision.apply_to(&mut settings);

        // Cursor pointed at B, who is gone: restart at A
        assert_eq!(decision.assignee.caller_id, CallerId(1));
        assert_eq!(settings.last_assigned_caller_id, Some(CallerId(1)));
    }

    #[test]
    fn test_eligible_callers_filters_and_orders() {
        let mut admin = caller(1, "Admin");
        admin.role = Role::Admin;
        let mut inactive = caller(2, "Gone");
        inactive.status = CallerStatus::Inactive;
        let callers = vec![caller(9, "Late"), admin, inactive, caller(4, "Early")];

        let ids: Vec<u64> = eligible_callers(&callers).iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![4, 9]);
    }
}
