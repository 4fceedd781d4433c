pub mod config;
pub mod play;

use anyhow::{bail, Context, Result};
use lingo_core::vocabulary::to_word_pairs;
use lingo_core::{Catalog, JsonFileStore, StateStore, UserState, WordPair};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// Pick the words to play: a lesson, else a category, else the whole catalog.
pub fn select_words(catalog: &Catalog, config: &AppConfig) -> Result<Vec<WordPair>> {
    let words = if let Some(lesson_id) = &config.lesson {
        match catalog.lesson_words(lesson_id) {
            Some(words) => to_word_pairs(words),
            None => bail!("unknown lesson: {}", lesson_id),
        }
    } else if let Some(category) = config.category {
        to_word_pairs(catalog.words_by_category(category))
    } else {
        to_word_pairs(catalog.words())
    };

    if words.is_empty() {
        bail!("no words to play");
    }
    Ok(words)
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!("Opening state store in {}", config.data_dir.display());
    let mut store = JsonFileStore::open(&config.data_dir)
        .with_context(|| format!("opening {}", config.data_dir.display()))?;
    let mut state: UserState = store.load(UserState::STORAGE_KEY)?.unwrap_or_default();

    let catalog = Catalog::builtin();
    let words = select_words(&catalog, &config)?;
    tracing::info!(
        "Starting matching game with {} words (level {}, {} XP)",
        words.len(),
        state.progress.level,
        state.progress.total_xp
    );

    let stdin = std::io::stdin();
    let recorder = play::play(&words, stdin.lock(), std::io::stdout(), StdRng::from_entropy())?;

    if recorder.apply(&mut state) {
        store.save(UserState::STORAGE_KEY, &state)?;
        tracing::info!(
            "Progress saved: level {}, {} XP",
            state.progress.level,
            state.progress.total_xp
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::Category;
    use std::path::PathBuf;

    fn config(lesson: Option<&str>, category: Option<Category>) -> AppConfig {
        AppConfig {
            data_dir: PathBuf::from("."),
            lesson: lesson.map(str::to_string),
            category,
        }
    }

    #[test]
    fn lesson_takes_precedence() {
        let catalog = Catalog::builtin();
        let words = select_words(&catalog, &config(Some("numbers-1"), Some(Category::Colors))).unwrap();
        assert_eq!(words.len(), 10);
        assert_eq!(words[0].source_text, "Un");
    }

    #[test]
    fn category_filters_words() {
        let catalog = Catalog::builtin();
        let words = select_words(&catalog, &config(None, Some(Category::Nouns))).unwrap();
        assert_eq!(words.len(), 8);
    }

    #[test]
    fn whole_catalog_by_default() {
        let catalog = Catalog::builtin();
        let words = select_words(&catalog, &config(None, None)).unwrap();
        assert_eq!(words.len(), 40);
    }

    #[test]
    fn unknown_lesson_fails() {
        let catalog = Catalog::builtin();
        assert!(select_words(&catalog, &config(Some("verbs-1"), None)).is_err());
    }
}
