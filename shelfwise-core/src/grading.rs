//! Genre-specific grading: gate first, then specialise per genre.

use serde::Serialize;
use std::fmt;

use crate::book::{Book, BookKind, Genre};
use crate::criteria::Criteria;
use crate::error::PromptError;
use crate::gate::{BASELINE_GRADE, gate};
use crate::keywords::{KeywordMatcher, KeywordSource};
use crate::refinement::{Mood, Prompter, Refinement, Session};

const MAX_GRADE: f64 = 100.0;
const WEIGHT: f64 = 0.1;
const YOUNG_READER_BONUS: f64 = 25.0;
const MOOD_BONUS: f64 = 40.0;
const MIN_ENCYCLOPEDIA_AGE: u32 = 10;

/// Interest words paired with the biography they single out.
const BIOGRAPHY_TRIGGERS: [(&[&str], &str); 3] = [
    (&["football", "soccer"], "Rafa: My Story"),
    (
        &["sports", "mentality", "relentless"],
        "Relentless: From Good to Great to Unstoppable",
    ),
    (&["tennis"], "Open: An Autobiography"),
];

const SCIENCE_FICTION_THEMES: [&str; 4] = ["space", "ai", "robotics", "future"];
const SCIENCE_FICTION_CLASSICS: [&str; 2] = ["Neuromancer", "Dune"];

/// Notice surfaced when a romance title matches the user's mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub author: String,
    pub mood: Mood,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Based on your mood, we recommend {} by {}.", self.title, self.author)
    }
}

/// What a finished run leaves behind besides the grades themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub session: Session,
    pub recommendations: Vec<Recommendation>,
}

/// Grades books one at a time, holding the run's refinement state.
///
/// The keyword source is read-only; the prompter is asked at most once per
/// refinable genre.
pub struct Grader<'a, K: ?Sized, P> {
    keywords: &'a K,
    prompter: P,
    matcher: KeywordMatcher,
    session: Session,
    recommendations: Vec<Recommendation>,
}

impl<'a, K, P> Grader<'a, K, P>
where
    K: KeywordSource + ?Sized,
    P: Prompter,
{
    pub fn new(keywords: &'a K, prompter: P) -> Self {
        Self {
            keywords,
            prompter,
            matcher: KeywordMatcher::default(),
            session: Session::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn with_matcher(mut self, matcher: KeywordMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Grade every book in catalog order.
    pub fn grade_all(&mut self, books: &mut [Book], criteria: &Criteria) -> Result<(), PromptError> {
        for book in books.iter_mut() {
            self.grade(book, criteria)?;
        }
        Ok(())
    }

    /// Grade a single book. The gate runs first; a rejected book stays at 0.
    pub fn grade(&mut self, book: &mut Book, criteria: &Criteria) -> Result<(), PromptError> {
        if !gate(book, criteria) {
            tracing::debug!(title = %book.title, price = book.price(), "over budget");
            return Ok(());
        }

        match book.kind {
            BookKind::Biography => self.grade_biography(book, criteria),
            BookKind::Encyclopedia => self.grade_encyclopedia(book, criteria)?,
            BookKind::ScienceFiction {
                scientific_accuracy,
                action_level,
            } => self.grade_science_fiction(book, criteria, scientific_accuracy, action_level),
            BookKind::Romance {
                emotional_depth,
                realism,
            } => self.grade_romance(book, criteria, emotional_depth, realism)?,
        }

        tracing::debug!(title = %book.title, genre = %book.genre(), grade = book.grade(), "graded");
        Ok(())
    }

    pub fn finish(self) -> RunSummary {
        RunSummary {
            session: self.session,
            recommendations: self.recommendations,
        }
    }

    fn grade_biography(&mut self, book: &mut Book, criteria: &Criteria) {
        let singled_out = BIOGRAPHY_TRIGGERS
            .iter()
            .any(|(words, title)| book.title == *title && criteria.mentions_any(words));
        if singled_out {
            book.set_grade(MAX_GRADE);
            return;
        }

        let mut grade = BASELINE_GRADE;
        if (10..=30).contains(&criteria.age) {
            grade += YOUNG_READER_BONUS;
        }
        let matched = self
            .matcher
            .match_genre(self.keywords, Genre::Biography, &criteria.interests);
        grade += f64::from(matched.increment);
        book.set_grade(grade);
    }

    fn grade_encyclopedia(&mut self, book: &mut Book, criteria: &Criteria) -> Result<(), PromptError> {
        if criteria.age < MIN_ENCYCLOPEDIA_AGE {
            book.set_grade(0.0);
            return Ok(());
        }

        let matched = self
            .matcher
            .match_genre(self.keywords, Genre::Encyclopedia, &criteria.interests);

        if matched.count > 0 {
            let Self { prompter, session, .. } = self;
            let asked_now = session.encyclopedia.resolve_once(|| {
                if prompter.confirm_encyclopedia()? {
                    Ok(Refinement::Accepted(prompter.education_level()?))
                } else {
                    Ok(Refinement::Declined)
                }
            })?;
            if asked_now {
                tracing::info!(state = ?session.encyclopedia, "encyclopedia refinement resolved");
            }
        }

        // Declined or never asked: the baseline grade stands.
        if let Some(level) = self.session.encyclopedia.accepted() {
            let grade = if book.title == level.canonical_title() { MAX_GRADE } else { 0.0 };
            book.set_grade(grade);
        }
        Ok(())
    }

    fn grade_science_fiction(
        &mut self,
        book: &mut Book,
        criteria: &Criteria,
        scientific_accuracy: u8,
        action_level: u8,
    ) {
        if criteria.mentions_any(&SCIENCE_FICTION_THEMES)
            && SCIENCE_FICTION_CLASSICS.contains(&book.title.as_str())
        {
            book.set_grade(MAX_GRADE);
            return;
        }

        let age_relevance = match criteria.age {
            0..=18 => 80.0,
            19..=34 => 100.0,
            _ => 60.0,
        };
        let gender_relevance = match criteria.gender.as_str() {
            "man" => 100.0,
            "woman" => 80.0,
            _ => 70.0,
        };
        let matched = self
            .matcher
            .match_genre(self.keywords, Genre::ScienceFiction, &criteria.interests);

        let grade = BASELINE_GRADE
            + WEIGHT * age_relevance
            + WEIGHT * gender_relevance
            + WEIGHT * f64::from(scientific_accuracy)
            + WEIGHT * f64::from(action_level)
            + f64::from(matched.increment);
        book.set_grade(grade);
    }

    fn grade_romance(
        &mut self,
        book: &mut Book,
        criteria: &Criteria,
        emotional_depth: u8,
        realism: u8,
    ) -> Result<(), PromptError> {
        let mut grade = BASELINE_GRADE + romance_base(criteria, emotional_depth, realism);

        let matched = self
            .matcher
            .match_genre(self.keywords, Genre::Romance, &criteria.interests);

        if matched.count > 0 {
            let Self { prompter, session, .. } = self;
            let asked_now = session
                .romance
                .resolve_once(|| Ok(Refinement::Accepted(prompter.mood()?)))?;
            if asked_now {
                tracing::info!(state = ?session.romance, "romance refinement resolved");
            }
        }

        if let Some(mood) = self.session.romance.accepted() {
            if book.title == mood.canonical_title() {
                grade += MOOD_BONUS;
                self.recommendations.push(Recommendation {
                    title: book.title.clone(),
                    author: book.author.clone(),
                    mood,
                });
            }
        }

        book.set_grade(grade);
        Ok(())
    }
}

/// Weighted demographic + attribute score for a romance title.
fn romance_base(criteria: &Criteria, emotional_depth: u8, realism: u8) -> f64 {
    let age_relevance = match criteria.age {
        10..=20 => 100.0,
        21..=30 => 80.0,
        _ => 60.0,
    };
    let gender_relevance = match criteria.gender.as_str() {
        "woman" => 100.0,
        "man" => 80.0,
        _ => 60.0,
    };
    WEIGHT * age_relevance
        + WEIGHT * f64::from(emotional_depth)
        + WEIGHT * f64::from(realism)
        + WEIGHT * gender_relevance
}

/// Grade a whole catalog with a fresh session.
pub fn grade_catalog<K, P>(
    books: &mut [Book],
    criteria: &Criteria,
    keywords: &K,
    prompter: P,
) -> Result<RunSummary, PromptError>
where
    K: KeywordSource + ?Sized,
    P: Prompter,
{
    let mut grader = Grader::new(keywords, prompter);
    grader.grade_all(books, criteria)?;
    Ok(grader.finish())
}
