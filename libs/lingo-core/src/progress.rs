//! User progress, preferences and game history.

use crate::session::SessionListener;
use crate::types::GameOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Experience points needed per level.
pub const XP_PER_LEVEL: u32 = 100;

/// Accumulated learning progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    pub total_xp: u32,
    pub level: u32,
    pub streak: u32,
    pub longest_streak: u32,
    pub lessons_completed: u32,
    pub total_study_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_study_date: Option<DateTime<Utc>>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            total_xp: 0,
            level: 1,
            streak: 0,
            longest_streak: 0,
            lessons_completed: 0,
            total_study_minutes: 0,
            last_study_date: None,
        }
    }
}

impl UserProgress {
    /// Add experience and recompute the level (one level per 100 XP).
    pub fn add_xp(&mut self, amount: u32) {
        self.total_xp = self.total_xp.saturating_add(amount);
        self.level = self.total_xp / XP_PER_LEVEL + 1;
    }

    pub fn increment_streak(&mut self) {
        self.streak += 1;
        self.longest_streak = self.longest_streak.max(self.streak);
    }

    pub fn reset_streak(&mut self) {
        self.streak = 0;
    }

    pub fn add_study_time(&mut self, minutes: u32, now: DateTime<Utc>) {
        self.total_study_minutes = self.total_study_minutes.saturating_add(minutes);
        self.last_study_date = Some(now);
    }

    pub fn complete_lesson(&mut self) {
        self.lessons_completed += 1;
    }

    /// Apply a partial update.
    pub fn merge(&self, update: &ProgressUpdate) -> Self {
        Self {
            total_xp: update.total_xp.unwrap_or(self.total_xp),
            level: update.level.unwrap_or(self.level),
            streak: update.streak.unwrap_or(self.streak),
            longest_streak: update.longest_streak.unwrap_or(self.longest_streak),
            lessons_completed: update.lessons_completed.unwrap_or(self.lessons_completed),
            total_study_minutes: update.total_study_minutes.unwrap_or(self.total_study_minutes),
            last_study_date: update.last_study_date.or(self.last_study_date),
        }
    }
}

/// Partial progress change (unset fields keep their value).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_xp: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_streak: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons_completed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_study_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_study_date: Option<DateTime<Utc>>,
}

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Self::System
    }
}

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    En,
    Fr,
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

/// User preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub notifications: bool,
    pub sound_enabled: bool,
    pub haptic_feedback: bool,
    pub auto_play_audio: bool,
    pub theme: Theme,
    pub language: Language,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            notifications: true,
            sound_enabled: true,
            haptic_feedback: true,
            auto_play_audio: true,
            theme: Theme::default(),
            language: Language::default(),
        }
    }
}

/// Partial preference change (unset fields keep their value).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub haptic_feedback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_play_audio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl UserPreferences {
    /// Apply a partial update.
    pub fn merge(&self, update: &PreferencesUpdate) -> Self {
        Self {
            notifications: update.notifications.unwrap_or(self.notifications),
            sound_enabled: update.sound_enabled.unwrap_or(self.sound_enabled),
            haptic_feedback: update.haptic_feedback.unwrap_or(self.haptic_feedback),
            auto_play_audio: update.auto_play_audio.unwrap_or(self.auto_play_audio),
            theme: update.theme.unwrap_or(self.theme),
            language: update.language.unwrap_or(self.language),
        }
    }
}

/// Mini-game kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    WordMatching,
    Memory,
    WordScramble,
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameScore {
    pub game_type: GameType,
    pub score: u32,
    pub time_spent_seconds: u64,
    pub accuracy: f64,
    pub mistakes: u32,
    pub played_at: DateTime<Utc>,
}

/// Everything persisted about the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(default)]
    pub progress: UserProgress,
    #[serde(default)]
    pub games: Vec<GameScore>,
}

impl UserState {
    /// Storage key of the persisted blob.
    pub const STORAGE_KEY: &'static str = "user-storage";

    /// Best score recorded for a game type.
    pub fn best_score(&self, game_type: GameType) -> Option<u32> {
        self.games
            .iter()
            .filter(|g| g.game_type == game_type)
            .map(|g| g.score)
            .max()
    }
}

/// Collects the results of a matching session for the progress store.
#[derive(Debug, Clone, Default)]
pub struct ProgressRecorder {
    completed: Option<GameScore>,
    abandoned: u32,
}

impl ProgressRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed(&self) -> Option<&GameScore> {
        self.completed.as_ref()
    }

    pub fn abandoned(&self) -> u32 {
        self.abandoned
    }

    fn record(&mut self, outcome: GameOutcome) {
        self.completed = Some(GameScore {
            game_type: GameType::WordMatching,
            score: outcome.score,
            time_spent_seconds: outcome.time_spent_seconds,
            accuracy: outcome.accuracy(),
            mistakes: outcome.mistakes,
            played_at: outcome.finished_at,
        });
    }

    /// Fold the recorded game into the user's state.
    /// Returns false when nothing was completed.
    pub fn apply(&self, state: &mut UserState) -> bool {
        let Some(game) = &self.completed else {
            return false;
        };

        state.progress.add_xp(game.score);
        let minutes = game.time_spent_seconds.div_ceil(60);
        state
            .progress
            .add_study_time(u32::try_from(minutes).unwrap_or(u32::MAX), game.played_at);
        state.games.push(game.clone());
        true
    }
}

impl SessionListener for ProgressRecorder {
    fn on_complete(&mut self, outcome: GameOutcome) {
        self.record(outcome);
    }

    fn on_exit(&mut self) {
        self.abandoned += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn default_progress_starts_at_level_one() {
        let progress = UserProgress::default();
        assert_eq!(progress.level, 1);
        assert_eq!(progress.total_xp, 0);
        assert!(progress.last_study_date.is_none());
    }

    #[test]
    fn level_up_every_hundred_xp() {
        let mut progress = UserProgress::default();
        progress.add_xp(99);
        assert_eq!(progress.level, 1);
        progress.add_xp(1);
        assert_eq!(progress.level, 2);
        progress.add_xp(250);
        assert_eq!(progress.total_xp, 350);
        assert_eq!(progress.level, 4);
    }

    #[test]
    fn longest_streak_survives_reset() {
        let mut progress = UserProgress::default();
        progress.increment_streak();
        progress.increment_streak();
        progress.increment_streak();
        progress.reset_streak();
        progress.increment_streak();
        assert_eq!(progress.streak, 1);
        assert_eq!(progress.longest_streak, 3);
    }

    #[test]
    fn study_time_sets_last_date() {
        let mut progress = UserProgress::default();
        let at = now();
        progress.add_study_time(15, at);
        progress.add_study_time(5, at);
        assert_eq!(progress.total_study_minutes, 20);
        assert_eq!(progress.last_study_date, Some(at));
    }

    #[test]
    fn complete_lesson_counts() {
        let mut progress = UserProgress::default();
        progress.complete_lesson();
        progress.complete_lesson();
        assert_eq!(progress.lessons_completed, 2);
    }

    #[test]
    fn merge_progress_keeps_unset_fields() {
        let studied_at = now();
        let mut progress = UserProgress::default();
        progress.add_xp(250);
        progress.add_study_time(10, studied_at);

        let update = ProgressUpdate {
            streak: Some(4),
            lessons_completed: Some(2),
            ..Default::default()
        };
        let merged = progress.merge(&update);
        assert_eq!(merged.streak, 4);
        assert_eq!(merged.lessons_completed, 2);
        assert_eq!(merged.level, 3);
        assert_eq!(merged.total_xp, 250);
        assert_eq!(merged.total_study_minutes, 10);
        assert_eq!(merged.last_study_date, Some(studied_at));
    }

    #[test]
    fn progress_update_skips_unset_fields_in_json() {
        let update = ProgressUpdate {
            total_xp: Some(40),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"total_xp":40}"#);

        let parsed: ProgressUpdate = serde_json::from_str(r#"{"streak":3}"#).unwrap();
        let merged = UserProgress::default().merge(&parsed);
        assert_eq!(merged.streak, 3);
        assert_eq!(merged.level, 1);
        assert!(merged.last_study_date.is_none());
    }

    #[test]
    fn merge_preferences_keeps_unset_fields() {
        let prefs = UserPreferences::default();
        let update = PreferencesUpdate {
            theme: Some(Theme::Dark),
            sound_enabled: Some(false),
            ..Default::default()
        };
        let merged = prefs.merge(&update);
        assert_eq!(merged.theme, Theme::Dark);
        assert!(!merged.sound_enabled);
        assert!(merged.notifications);
        assert_eq!(merged.language, Language::En);
    }

    #[test]
    fn recorder_applies_completed_game() {
        let finished_at = DateTime::parse_from_rfc3339("2024-03-10T18:45:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let mut recorder = ProgressRecorder::new();
        recorder.on_complete(GameOutcome {
            score: 120,
            time_spent_seconds: 61,
            mistakes: 4,
            pairs: 12,
            finished_at,
        });

        let mut state = UserState::default();
        assert!(recorder.apply(&mut state));
        assert_eq!(state.progress.total_xp, 120);
        assert_eq!(state.progress.level, 2);
        assert_eq!(state.progress.total_study_minutes, 2);
        assert_eq!(state.games.len(), 1);
        assert_eq!(state.games[0].accuracy, 75.0);
        assert_eq!(state.games[0].played_at, finished_at);
        assert_eq!(state.progress.last_study_date, Some(finished_at));
        assert_eq!(state.best_score(GameType::WordMatching), Some(120));
    }

    #[test]
    fn recorder_ignores_abandoned_game() {
        let mut recorder = ProgressRecorder::new();
        recorder.on_exit();
        let mut state = UserState::default();
        assert!(!recorder.apply(&mut state));
        assert_eq!(recorder.abandoned(), 1);
        assert_eq!(state, UserState::default());
    }

    #[test]
    fn user_state_reads_partial_blob() {
        let state: UserState =
            serde_json::from_str(r#"{"progress":{"total_xp":40,"level":1,"streak":2,"longest_streak":5,"lessons_completed":1,"total_study_minutes":30}}"#)
                .unwrap();
        assert_eq!(state.progress.streak, 2);
        assert_eq!(state.preferences, UserPreferences::default());
        assert!(state.games.is_empty());
    }
}
