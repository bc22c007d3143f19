use crate::day::DayKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatRecord {
    pub id: String,
    pub image_url: String,
    pub fact: String,
    pub display_name: String,
    #[serde(default)]
    pub is_personal: bool,
}

/// Everything remembered between visits. Persisted as one JSON object.
///
/// Fields missing from an older stored shape come back as their empty value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub current_cat: Option<CatRecord>,
    pub streak: u32,
    pub total_visits: u64,
    pub favorite_ids: BTreeSet<String>,
    pub daily_cat_date: Option<DayKey>,
    pub last_visit_date: Option<DayKey>,
    pub last_session_id: Option<String>,
    pub streak_start_date: Option<DayKey>,
}

impl AppState {
    /// Flips the current cat in or out of the favorites. Returns the new membership,
    /// or `None` when no cat has been chosen yet.
    pub fn toggle_favorite(&mut self) -> Option<bool> {
        let id = self.current_cat.as_ref()?.id.clone();
        if self.favorite_ids.remove(&id) {
            Some(false)
        } else {
            self.favorite_ids.insert(id);
            Some(true)
        }
    }

    pub fn is_favorite(&self) -> bool {
        self.current_cat
            .as_ref()
            .is_some_and(|cat| self.favorite_ids.contains(&cat.id))
    }
}

#[derive(Debug, Deserialize)]
pub struct VisitRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DailyCatResponse {
    pub date: String,
    pub date_display: String,
    pub streak: u32,
    pub total_visits: u64,
    pub favorite_count: usize,
    pub is_favorite: bool,
    pub cat: Option<CatRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShareResponse {
    pub title: String,
    pub text: String,
    pub url: String,
}
