use crate::catalog::{daily_cat, personal_cats, PERSONAL_CAT_PERCENT};
use crate::day::DayKey;
use crate::fetcher::RemoteCatFetcher;
use crate::models::CatRecord;
use async_trait::async_trait;
use rand::Rng;

/// Chooses a new cat of the day. Always yields a usable record.
#[async_trait]
pub trait CatPicker: Send + Sync {
    async fn pick(&self, today: DayKey) -> CatRecord;
}

/// Offline selection seeded by the date, identical on every run.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyCatPicker;

#[async_trait]
impl CatPicker for DailyCatPicker {
    async fn pick(&self, today: DayKey) -> CatRecord {
        daily_cat(today)
    }
}

/// Network selection: a random personal cat some of the time, otherwise the remote API.
pub struct RemoteCatPicker {
    fetcher: RemoteCatFetcher,
    personal_chance: f64,
}

impl RemoteCatPicker {
    pub fn new(fetcher: RemoteCatFetcher) -> Self {
        Self {
            fetcher,
            personal_chance: f64::from(PERSONAL_CAT_PERCENT) / 100.0,
        }
    }

    pub fn with_personal_chance(mut self, chance: f64) -> Self {
        self.personal_chance = if chance.is_finite() {
            chance.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    fn roll_personal(&self) -> Option<CatRecord> {
        let mut rng = rand::thread_rng();
        if !rng.gen_bool(self.personal_chance) {
            return None;
        }
        let personal = personal_cats();
        if personal.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..personal.len());
        personal.into_iter().nth(index)
    }
}

#[async_trait]
impl CatPicker for RemoteCatPicker {
    async fn pick(&self, _today: DayKey) -> CatRecord {
        if let Some(cat) = self.roll_personal() {
            return cat;
        }
        self.fetcher.fetch_random_cat().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_cat;
    use std::time::Duration;

    fn unreachable_fetcher() -> RemoteCatFetcher {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        RemoteCatFetcher::new(format!("http://127.0.0.1:{port}/"), Duration::from_secs(1)).unwrap()
    }

    #[tokio::test]
    async fn daily_picker_matches_catalog() {
        let today = DayKey::parse("2024-01-10").unwrap();
        assert_eq!(DailyCatPicker.pick(today).await, daily_cat(today));
    }

    #[tokio::test]
    async fn remote_picker_always_personal_at_full_chance() {
        let picker = RemoteCatPicker::new(unreachable_fetcher()).with_personal_chance(1.0);
        let cat = picker.pick(DayKey::today()).await;
        assert!(cat.is_personal);
    }

    #[tokio::test]
    async fn non_finite_chance_never_picks_personal() {
        for chance in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let picker = RemoteCatPicker::new(unreachable_fetcher()).with_personal_chance(chance);
            assert_eq!(picker.personal_chance, 0.0);
            assert_eq!(picker.pick(DayKey::today()).await, fallback_cat());
        }
    }

    #[tokio::test]
    async fn remote_picker_falls_back_when_api_is_down() {
        let picker = RemoteCatPicker::new(unreachable_fetcher()).with_personal_chance(0.0);
        assert_eq!(picker.pick(DayKey::today()).await, fallback_cat());
    }
}
