use crate::day::DayKey;
use crate::models::AppState;
use crate::picker::CatPicker;
use tracing::{debug, info};

/// Computes the state for a page load on `today`.
///
/// The cat is reused when it was already chosen today; otherwise `picker` chooses a
/// new one. Counters are advanced by [`advance_counters`].
pub async fn derive_daily_state(
    prior: Option<&AppState>,
    today: DayKey,
    session_id: &str,
    picker: &dyn CatPicker,
) -> AppState {
    let reusable = prior
        .filter(|state| state.daily_cat_date == Some(today))
        .and_then(|state| state.current_cat.clone());

    let current_cat = match reusable {
        Some(cat) => {
            debug!(%today, id = %cat.id, "reusing cat of the day");
            cat
        }
        None => {
            let cat = picker.pick(today).await;
            info!(%today, id = %cat.id, personal = cat.is_personal, "chose new cat of the day");
            cat
        }
    };

    let mut next = advance_counters(prior, today, session_id);
    next.current_cat = Some(current_cat);
    next.daily_cat_date = Some(today);
    next
}

/// Streak, visit and date bookkeeping for a visit. Leaves the cat untouched.
pub fn advance_counters(prior: Option<&AppState>, today: DayKey, session_id: &str) -> AppState {
    let mut next = prior.cloned().unwrap_or_default();

    match prior.and_then(|state| state.last_visit_date) {
        None => {
            next.streak = 1;
            next.streak_start_date = Some(today);
        }
        Some(last) => match today.days_since(last) {
            1 => next.streak = next.streak.saturating_add(1),
            gap if gap > 1 => {
                next.streak = 1;
                next.streak_start_date = Some(today);
            }
            // Same day, or the clock moved backwards.
            _ => {}
        },
    }
    if next.streak == 0 {
        next.streak = 1;
        next.streak_start_date.get_or_insert(today);
    }

    let same_session = prior
        .and_then(|state| state.last_session_id.as_deref())
        .is_some_and(|last| last == session_id);
    if !same_session {
        next.total_visits = next.total_visits.saturating_add(1);
    }

    next.last_visit_date = Some(today);
    next.last_session_id = Some(session_id.to_string());
    next
}
