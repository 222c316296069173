//! One-time clarifying questions, asked per genre and frozen for the run.
//!
//! Encyclopedia asks "do you need one?" and then the education level.
//! Romance asks for the user's mood. Both transitions happen at most once.

use serde::Serialize;
use std::fmt;

use crate::error::PromptError;

/// Education levels offered by the encyclopedia follow-up question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    MiddleSchool,
    HighSchool,
    Undergraduate,
    Graduate,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::MiddleSchool,
        EducationLevel::HighSchool,
        EducationLevel::Undergraduate,
        EducationLevel::Graduate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::MiddleSchool => "middle school",
            EducationLevel::HighSchool => "high school",
            EducationLevel::Undergraduate => "undergraduate",
            EducationLevel::Graduate => "graduate",
        }
    }

    /// The one encyclopedia that suits this level.
    pub fn canonical_title(&self) -> &'static str {
        match self {
            EducationLevel::MiddleSchool => "The New Children's Encyclopedia",
            EducationLevel::HighSchool => "World Encyclopedia for High School Students",
            EducationLevel::Undergraduate => "Undergraduate Encyclopedia of Physics",
            EducationLevel::Graduate => "Graduate Encyclopedia of Cosmology and Astrophysics",
        }
    }

    pub fn parse(answer: &str) -> Option<Self> {
        let answer = answer.trim().to_lowercase();
        Self::ALL.into_iter().find(|l| l.label() == answer)
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Moods offered by the romance question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Sad,
    Adventurous,
    NeedALaugh,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Adventurous, Mood::NeedALaugh];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Adventurous => "adventurous",
            Mood::NeedALaugh => "need a laugh",
        }
    }

    /// The romance title recommended for this mood.
    pub fn canonical_title(&self) -> &'static str {
        match self {
            Mood::Happy => "Me Before You",
            Mood::Sad => "The Fault in Our Stars",
            Mood::Adventurous => "Outlander",
            Mood::NeedALaugh => "Can You Keep a Secret?",
        }
    }

    /// Exact match against the labels; moods are not case-folded.
    pub fn parse(answer: &str) -> Option<Self> {
        let answer = answer.trim();
        Self::ALL.into_iter().find(|m| m.label() == answer)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-genre refinement state.
///
/// `NotAsked` moves to `Declined` or `Accepted` exactly once; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum Refinement<T> {
    #[default]
    NotAsked,
    Declined,
    Accepted(T),
}

impl<T: Copy> Refinement<T> {
    pub fn is_asked(&self) -> bool {
        !matches!(self, Refinement::NotAsked)
    }

    pub fn accepted(&self) -> Option<T> {
        match self {
            Refinement::Accepted(detail) => Some(*detail),
            _ => None,
        }
    }

    /// Run `ask` if nothing has been asked yet; otherwise keep the frozen answer.
    ///
    /// Returns true when this call performed the transition.
    pub fn resolve_once<F>(&mut self, ask: F) -> Result<bool, PromptError>
    where
        F: FnOnce() -> Result<Refinement<T>, PromptError>,
    {
        if self.is_asked() {
            return Ok(false);
        }
        let next = ask()?;
        // A prompt that answers "not asked" still counts as asked.
        *self = match next {
            Refinement::NotAsked => Refinement::Declined,
            other => other,
        };
        Ok(true)
    }
}

/// Interactive prompt channel. Implementations retry invalid input themselves.
pub trait Prompter {
    /// "An encyclopedia might match your needs. Is this correct?"
    fn confirm_encyclopedia(&mut self) -> Result<bool, PromptError>;
    /// Follow-up after a yes: which education level.
    fn education_level(&mut self) -> Result<EducationLevel, PromptError>;
    /// "How are you feeling today?"
    fn mood(&mut self) -> Result<Mood, PromptError>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn confirm_encyclopedia(&mut self) -> Result<bool, PromptError> {
        (**self).confirm_encyclopedia()
    }

    fn education_level(&mut self) -> Result<EducationLevel, PromptError> {
        (**self).education_level()
    }

    fn mood(&mut self) -> Result<Mood, PromptError> {
        (**self).mood()
    }
}

/// Refinement state for one grading run. Create a fresh one per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub encyclopedia: Refinement<EducationLevel>,
    pub romance: Refinement<Mood>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}
