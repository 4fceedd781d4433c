//! Built-in French vocabulary and the lessons that teach it.

use crate::types::WordPair;
use serde::{Deserialize, Serialize};

/// Vocabulary category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Greetings,
    Numbers,
    Colors,
    Nouns,
    Articles,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Greetings,
        Self::Numbers,
        Self::Colors,
        Self::Nouns,
        Self::Articles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greetings => "greetings",
            Self::Numbers => "numbers",
            Self::Colors => "colors",
            Self::Nouns => "nouns",
            Self::Articles => "articles",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}

/// One French word with its English meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub id: String,
    pub french: String,
    pub english: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    pub category: Category,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}

impl VocabularyEntry {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn to_word_pair(&self) -> WordPair {
        WordPair::new(&self.id, &self.french, &self.english)
    }
}

/// Kind of lesson step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Introduction,
    Vocabulary,
    Practice,
    Quiz,
    Review,
}

/// One step of a lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonStep {
    pub id: String,
    pub kind: StepKind,
    pub title: String,
    pub content: String,
    /// Words taught in this step, by vocabulary id.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub word_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
}

/// A lesson in the learning path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub order: u32,
    pub estimated_minutes: u32,
    pub steps: Vec<LessonStep>,
    pub tags: Vec<String>,
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
}

/// Vocabulary and lessons available to the app.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    words: Vec<VocabularyEntry>,
    lessons: Vec<Lesson>,
}

impl Catalog {
    pub fn new(words: Vec<VocabularyEntry>, mut lessons: Vec<Lesson>) -> Self {
        lessons.sort_by_key(|lesson| lesson.order);
        Self { words, lessons }
    }

    /// The catalog shipped with the app.
    pub fn builtin() -> Self {
        let words = builtin_words();
        let lessons = builtin_lessons(&words);
        Self::new(words, lessons)
    }

    pub fn words(&self) -> &[VocabularyEntry] {
        &self.words
    }

    pub fn word(&self, id: &str) -> Option<&VocabularyEntry> {
        self.words.iter().find(|w| w.id == id)
    }

    pub fn words_by_category(&self, category: Category) -> Vec<&VocabularyEntry> {
        self.words.iter().filter(|w| w.category == category).collect()
    }

    pub fn words_by_difficulty(&self, difficulty: Difficulty) -> Vec<&VocabularyEntry> {
        self.words
            .iter()
            .filter(|w| w.difficulty == difficulty)
            .collect()
    }

    pub fn words_with_tag(&self, tag: &str) -> Vec<&VocabularyEntry> {
        self.words.iter().filter(|w| w.has_tag(tag)).collect()
    }

    /// Lessons in learning-path order.
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    pub fn lessons_by_category(&self, category: Category) -> Vec<&Lesson> {
        self.lessons
            .iter()
            .filter(|l| l.category == category)
            .collect()
    }

    /// Words taught by a lesson's steps, first occurrence first.
    /// Returns `None` for an unknown lesson.
    pub fn lesson_words(&self, lesson_id: &str) -> Option<Vec<&VocabularyEntry>> {
        let lesson = self.lesson(lesson_id)?;
        let mut words: Vec<&VocabularyEntry> = Vec::new();
        for id in lesson.steps.iter().flat_map(|s| s.word_ids.iter()) {
            if words.iter().any(|w| &w.id == id) {
                continue;
            }
            if let Some(word) = self.word(id) {
                words.push(word);
            }
        }
        Some(words)
    }
}

/// Convert vocabulary entries into playable word pairs.
pub fn to_word_pairs<'a>(entries: impl IntoIterator<Item = &'a VocabularyEntry>) -> Vec<WordPair> {
    entries.into_iter().map(VocabularyEntry::to_word_pair).collect()
}

fn entry(id: &str, french: &str, english: &str, category: Category, tags: &[&str]) -> VocabularyEntry {
    VocabularyEntry {
        id: id.to_string(),
        french: french.to_string(),
        english: english.to_string(),
        pronunciation: None,
        category,
        difficulty: Difficulty::Beginner,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn builtin_words() -> Vec<VocabularyEntry> {
    use Category::*;

    vec![
        entry("g1", "Bonjour", "Hello", Greetings, &["greetings", "basic"]),
        entry("g2", "Salut", "Hi", Greetings, &["greetings", "informal"]),
        entry("g3", "Au revoir", "Goodbye", Greetings, &["greetings", "basic"]),
        entry("g4", "Merci", "Thank you", Greetings, &["greetings", "polite"]),
        entry("g5", "S'il vous plaît", "Please", Greetings, &["greetings", "polite"]),
        entry("g6", "Comment allez-vous?", "How are you?", Greetings, &["greetings", "formal"]),
        entry("g7", "Ça va?", "How are you?", Greetings, &["greetings", "informal"]),
        entry("g8", "Bien", "Good", Greetings, &["greetings", "response"]),
        entry("n1", "Un", "One", Numbers, &["numbers", "counting"]),
        entry("n2", "Deux", "Two", Numbers, &["numbers", "counting"]),
        entry("n3", "Trois", "Three", Numbers, &["numbers", "counting"]),
        entry("n4", "Quatre", "Four", Numbers, &["numbers", "counting"]),
        entry("n5", "Cinq", "Five", Numbers, &["numbers", "counting"]),
        entry("n6", "Six", "Six", Numbers, &["numbers", "counting"]),
        entry("n7", "Sept", "Seven", Numbers, &["numbers", "counting"]),
        entry("n8", "Huit", "Eight", Numbers, &["numbers", "counting"]),
        entry("n9", "Neuf", "Nine", Numbers, &["numbers", "counting"]),
        entry("n10", "Dix", "Ten", Numbers, &["numbers", "counting"]),
        entry("c1", "Rouge", "Red", Colors, &["colors", "basic"]),
        entry("c2", "Bleu", "Blue", Colors, &["colors", "basic"]),
        entry("c3", "Vert", "Green", Colors, &["colors", "basic"]),
        entry("c4", "Jaune", "Yellow", Colors, &["colors", "basic"]),
        entry("c5", "Noir", "Black", Colors, &["colors", "basic"]),
        entry("c6", "Blanc", "White", Colors, &["colors", "basic"]),
        entry("c7", "Orange", "Orange", Colors, &["colors", "basic"]),
        entry("c8", "Violet", "Purple", Colors, &["colors", "basic"]),
        entry("noun1", "Chat", "Cat", Nouns, &["animals", "basic"]),
        entry("noun2", "Chien", "Dog", Nouns, &["animals", "basic"]),
        entry("noun3", "Maison", "House", Nouns, &["home", "basic"]),
        entry("noun4", "Voiture", "Car", Nouns, &["transport", "basic"]),
        entry("noun5", "Livre", "Book", Nouns, &["objects", "basic"]),
        entry("noun6", "Table", "Table", Nouns, &["furniture", "basic"]),
        entry("noun7", "Eau", "Water", Nouns, &["drinks", "basic"]),
        entry("noun8", "Pain", "Bread", Nouns, &["food", "basic"]),
        entry("art1", "Le", "The (masculine)", Articles, &["articles", "definite", "masculine"]),
        entry("art2", "La", "The (feminine)", Articles, &["articles", "definite", "feminine"]),
        entry("art3", "Les", "The (plural)", Articles, &["articles", "definite", "plural"]),
        entry("art4", "Un", "A/An (masculine)", Articles, &["articles", "indefinite", "masculine"]),
        entry("art5", "Une", "A/An (feminine)", Articles, &["articles", "indefinite", "feminine"]),
        entry("art6", "Des", "Some (plural)", Articles, &["articles", "indefinite", "plural"]),
    ]
}

fn step(id: &str, kind: StepKind, title: &str, content: &str, minutes: u32) -> LessonStep {
    LessonStep {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        content: content.to_string(),
        word_ids: Vec::new(),
        minutes: Some(minutes),
    }
}

fn with_words<'a>(
    mut step: LessonStep,
    words: impl IntoIterator<Item = &'a VocabularyEntry>,
) -> LessonStep {
    step.word_ids = words.into_iter().map(|w| w.id.clone()).collect();
    step
}

struct LessonSpec<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    category: Category,
    order: u32,
    estimated_minutes: u32,
    tags: &'a [&'a str],
}

fn lesson(spec: LessonSpec<'_>, steps: Vec<LessonStep>) -> Lesson {
    Lesson {
        id: spec.id.to_string(),
        title: spec.title.to_string(),
        description: spec.description.to_string(),
        category: spec.category,
        difficulty: Difficulty::Beginner,
        order: spec.order,
        estimated_minutes: spec.estimated_minutes,
        steps,
        tags: spec.tags.iter().map(|t| t.to_string()).collect(),
        unlocked: true,
        prerequisites: Vec::new(),
    }
}

fn builtin_lessons(words: &[VocabularyEntry]) -> Vec<Lesson> {
    use StepKind::*;

    let in_category = |category: Category| words.iter().filter(move |w| w.category == category);

    vec![
        lesson(
            LessonSpec {
                id: "greetings-1",
                title: "Basic Greetings",
                description: "Learn essential French greetings for everyday conversations",
                category: Category::Greetings,
                order: 1,
                estimated_minutes: 10,
                tags: &["greetings", "basic", "conversation"],
            },
            vec![
                step(
                    "greetings-intro",
                    Introduction,
                    "Welcome to French Greetings",
                    "In this lesson, you'll learn the most common French greetings used in everyday conversations.",
                    2,
                ),
                with_words(
                    step("greetings-vocab", Vocabulary, "Essential Greetings", "Let's learn the basic greetings:", 5),
                    in_category(Category::Greetings),
                ),
                step(
                    "greetings-practice",
                    Practice,
                    "Practice Greetings",
                    "Practice using these greetings in different situations",
                    3,
                ),
            ],
        ),
        lesson(
            LessonSpec {
                id: "numbers-1",
                title: "Numbers 1-10",
                description: "Master counting from one to ten in French",
                category: Category::Numbers,
                order: 2,
                estimated_minutes: 12,
                tags: &["numbers", "counting", "basic"],
            },
            vec![
                step(
                    "numbers-intro",
                    Introduction,
                    "Counting in French",
                    "Numbers are essential in any language. Let's start with counting from 1 to 10.",
                    2,
                ),
                with_words(
                    step("numbers-vocab", Vocabulary, "Numbers 1-10", "Learn to count in French:", 6),
                    in_category(Category::Numbers),
                ),
                step(
                    "numbers-practice",
                    Practice,
                    "Practice Counting",
                    "Practice counting and recognizing numbers",
                    4,
                ),
            ],
        ),
        lesson(
            LessonSpec {
                id: "colors-1",
                title: "Basic Colors",
                description: "Learn the names of common colors in French",
                category: Category::Colors,
                order: 3,
                estimated_minutes: 10,
                tags: &["colors", "descriptive", "basic"],
            },
            vec![
                step(
                    "colors-intro",
                    Introduction,
                    "Colors in French",
                    "Colors help us describe the world around us.",
                    2,
                ),
                with_words(
                    step("colors-vocab", Vocabulary, "Basic Colors", "Learn the names of colors:", 5),
                    in_category(Category::Colors),
                ),
                step(
                    "colors-practice",
                    Practice,
                    "Practice Colors",
                    "Practice identifying and naming colors",
                    3,
                ),
            ],
        ),
        lesson(
            LessonSpec {
                id: "nouns-1",
                title: "Common Nouns",
                description: "Learn everyday objects and animals in French",
                category: Category::Nouns,
                order: 4,
                estimated_minutes: 12,
                tags: &["nouns", "objects", "animals"],
            },
            vec![
                step(
                    "nouns-intro",
                    Introduction,
                    "Common Objects",
                    "Let's learn the names of common objects and animals you see every day.",
                    2,
                ),
                with_words(
                    step("nouns-vocab", Vocabulary, "Everyday Objects", "Learn the names of common objects:", 6),
                    in_category(Category::Nouns),
                ),
                step(
                    "nouns-practice",
                    Practice,
                    "Practice Nouns",
                    "Practice identifying objects and animals",
                    4,
                ),
            ],
        ),
        lesson(
            LessonSpec {
                id: "articles-1",
                title: "Definite & Indefinite Articles",
                description: "Master French articles: le, la, les, un, une, des",
                category: Category::Articles,
                order: 5,
                estimated_minutes: 15,
                tags: &["articles", "grammar", "basic"],
            },
            vec![
                step(
                    "articles-intro",
                    Introduction,
                    "French Articles",
                    "Articles are small words that come before nouns.",
                    3,
                ),
                with_words(
                    step("articles-vocab", Vocabulary, "Definite Articles", "Learn the definite articles (the):", 4),
                    in_category(Category::Articles).filter(|w| w.has_tag("definite")),
                ),
                with_words(
                    step(
                        "articles-indefinite",
                        Vocabulary,
                        "Indefinite Articles",
                        "Learn the indefinite articles (a/an/some):",
                        4,
                    ),
                    in_category(Category::Articles).filter(|w| w.has_tag("indefinite")),
                ),
                step(
                    "articles-practice",
                    Practice,
                    "Practice Articles",
                    "Practice using articles with nouns",
                    4,
                ),
            ],
        ),
    ]
}
