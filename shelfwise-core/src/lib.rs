//! shelfwise-core: grading engine for the Shelfwise book recommender.
//!
//! Books are gated on price, graded per genre (with fuzzy keyword matching and
//! one-time refinement questions), then ranked.

pub mod book;
pub mod criteria;
pub mod error;
pub mod gate;
pub mod grading;
pub mod keywords;
pub mod ranking;
pub mod refinement;

pub use book::{Book, BookKind, DEFAULT_PRICE, DEFAULT_YEAR, Family, Genre, Isbn};
pub use criteria::{Criteria, GENDERS, is_valid_gender, tokenize};
pub use error::{BookError, PromptError};
pub use gate::{BASELINE_GRADE, gate};
pub use grading::{Grader, Recommendation, RunSummary, grade_catalog};
pub use keywords::{
    KeywordMatch, KeywordMatcher, KeywordSet, KeywordSource, MATCH_INCREMENT, MATCH_THRESHOLD,
    similarity,
};
pub use ranking::{DEFAULT_TOP_N, RankedEntry, rank, top_n};
pub use refinement::{EducationLevel, Mood, Prompter, Refinement, Session};
