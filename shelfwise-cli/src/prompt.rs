//! Console side of the conversation: collecting criteria and answering
//! the grader's refinement questions. Invalid answers are retried in place.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use shelfwise_core::{Criteria, EducationLevel, Mood, PromptError, Prompter, is_valid_gender};

/// Values supplied up front (CLI flags); anything missing is asked for.
#[derive(Debug, Clone, Default)]
pub struct Preset {
    pub age: Option<u32>,
    pub max_price: Option<f64>,
    pub gender: Option<String>,
    pub interests: Option<String>,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, Box<dyn Write>> {
    /// Read stdin; write prompts to stdout, or stderr when stdout carries data.
    pub fn stdio(prompts_to_stderr: bool) -> Self {
        let output: Box<dyn Write> = if prompts_to_stderr {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        };
        Console::new(io::stdin().lock(), output)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut s = String::new();
        if self.input.read_line(&mut s)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(s.trim().to_string())
    }

    fn ask_until<T>(
        &mut self,
        label: &str,
        hint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, PromptError> {
        loop {
            let answer = self.ask(label)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            self.say(hint)?;
        }
    }

    pub fn age(&mut self) -> Result<u32, PromptError> {
        self.ask_until("Enter age: ", "Please enter a positive whole number for age.", parse_age)
    }

    pub fn max_price(&mut self) -> Result<f64, PromptError> {
        self.ask_until(
            "Enter max price (in US $): ",
            "Please enter a positive number for maximum price.",
            parse_price,
        )
    }

    pub fn gender(&mut self) -> Result<String, PromptError> {
        self.ask_until(
            "Enter gender: ",
            "Please enter a valid gender (man, woman, or other).",
            |g| is_valid_gender(g).then(|| g.to_string()),
        )
    }

    pub fn interests(&mut self) -> Result<String, PromptError> {
        self.ask(
            "Tell me what type of book you want (romance, sci-fi, etc.), what you need it for \
             (leisure, gift, studying)\nand some of your interests (sport, science, technology). \
             A few keywords or a few sentences are fine:\n",
        )
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn confirm_encyclopedia(&mut self) -> Result<bool, PromptError> {
        self.say("The search algorithm has detected that an encyclopedic book might match your needs.")?;
        let yes = self.ask_until(
            "Is this correct (yes/no)? ",
            "Please enter a valid answer (yes or no).",
            parse_yes_no,
        )?;
        if !yes {
            self.say("Thank you for the feedback! Moving on with the search ...\n")?;
        }
        Ok(yes)
    }

    fn education_level(&mut self) -> Result<EducationLevel, PromptError> {
        self.ask_until(
            "For what level of education do you need it \
             (middle school, high school, undergraduate, graduate)? ",
            "Please enter a valid level (middle/high school, undergraduate/graduate).",
            EducationLevel::parse,
        )
    }

    fn mood(&mut self) -> Result<Mood, PromptError> {
        self.ask_until(
            "How are you feeling today (happy, sad, adventurous, need a laugh)? ",
            "Please pick one of: happy, sad, adventurous, need a laugh.",
            Mood::parse,
        )
    }
}

/// Build criteria from `preset`, asking only for what is missing.
pub fn collect_criteria<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    preset: &Preset,
) -> Result<Criteria> {
    let age = match preset.age {
        Some(0) => bail!("--age must be positive"),
        Some(age) => age,
        None => console.age()?,
    };
    let max_price = match preset.max_price {
        Some(p) if !(p.is_finite() && p > 0.0) => bail!("--max-price must be positive"),
        Some(p) => p,
        None => console.max_price()?,
    };
    let gender = match &preset.gender {
        Some(g) if !is_valid_gender(g) => bail!("--gender must be one of man, woman, other"),
        Some(g) => g.clone(),
        None => console.gender()?,
    };
    let interests = match &preset.interests {
        Some(i) => i.clone(),
        None => console.interests()?,
    };
    Ok(Criteria::new(age, max_price, gender, interests))
}

pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

pub fn parse_age(answer: &str) -> Option<u32> {
    answer.trim().parse().ok().filter(|a| *a > 0)
}

pub fn parse_price(answer: &str) -> Option<f64> {
    answer
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(c: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&c.output).to_string()
    }

    #[test]
    fn test_parsers() {
        assert_eq!(parse_yes_no("Yes"), Some(true));
        assert_eq!(parse_yes_no(" no "), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
        assert_eq!(parse_age("16"), Some(16));
        assert_eq!(parse_age("0"), None);
        assert_eq!(parse_age("-3"), None);
        assert_eq!(parse_price("19.5"), Some(19.5));
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price("NaN"), None);
    }

    #[test]
    fn test_collect_retries_invalid_answers() {
        let mut c = console("abc\n-1\n25\nfree\n40\nrobot\nWoman\nI love space\n");
        let criteria = collect_criteria(&mut c, &Preset::default()).unwrap();
        assert_eq!(criteria.age, 25);
        assert_eq!(criteria.max_price, 40.0);
        assert_eq!(criteria.gender, "Woman");
        assert_eq!(criteria.interests, vec!["i", "love", "space"]);

        let out = transcript(&c);
        assert_eq!(out.matches("Please enter a positive whole number for age.").count(), 2);
        assert!(out.contains("Please enter a valid gender"));
    }

    #[test]
    fn test_preset_skips_questions() {
        let mut c = console("");
        let preset = Preset {
            age: Some(30),
            max_price: Some(20.0),
            gender: Some("man".to_string()),
            interests: Some("tennis".to_string()),
        };
        let criteria = collect_criteria(&mut c, &preset).unwrap();
        assert_eq!(criteria.age, 30);
        assert!(transcript(&c).is_empty());
    }

    #[test]
    fn test_invalid_preset_rejected() {
        let mut c = console("");
        let preset = Preset {
            age: Some(3),
            max_price: Some(1.0),
            gender: Some("robot".to_string()),
            interests: None,
        };
        let err = collect_criteria(&mut c, &preset).unwrap_err();
        assert!(err.to_string().contains("--gender"));
    }

    #[test]
    fn test_encyclopedia_flow() {
        let mut c = console("perhaps\nYES\nkindergarten\nhigh school\n");
        assert!(c.confirm_encyclopedia().unwrap());
        assert_eq!(c.education_level().unwrap(), EducationLevel::HighSchool);
        assert!(transcript(&c).contains("Please enter a valid answer (yes or no)."));
    }

    #[test]
    fn test_decline_prints_thanks() {
        let mut c = console("no\n");
        assert!(!c.confirm_encyclopedia().unwrap());
        assert!(transcript(&c).contains("Moving on with the search"));
    }

    #[test]
    fn test_mood_retries_until_valid() {
        let mut c = console("Happy\nhappy\n");
        assert_eq!(c.mood().unwrap(), Mood::Happy);
    }

    #[test]
    fn test_closed_input() {
        let mut c = console("");
        assert!(matches!(c.mood(), Err(PromptError::Closed)));
    }
}
