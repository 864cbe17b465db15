//! Prompt Builder — deterministic instruction strings for the generation call.
//!
//! Pure function of (resume text, mode, response length). The branching table
//! and word-limit lookup are part of the product contract; change them only
//! together with the tests below.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Commentary persona. Defaults to `Roast` when the form omits the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Roast,
    Feedback,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "roast" => Ok(Mode::Roast),
            "feedback" => Ok(Mode::Feedback),
            other => Err(format!("Unknown mode '{other}'")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Roast => "roast",
            Mode::Feedback => "feedback",
        })
    }
}

/// Word-budget preset. Defaults to `Medium` when the form omits the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseLength {
    Short,
    #[default]
    Medium,
    Descriptive,
}

impl FromStr for ResponseLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(ResponseLength::Short),
            "medium" => Ok(ResponseLength::Medium),
            "descriptive" => Ok(ResponseLength::Descriptive),
            other => Err(format!("Unknown responseLength '{other}'")),
        }
    }
}

impl fmt::Display for ResponseLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResponseLength::Short => "short",
            ResponseLength::Medium => "medium",
            ResponseLength::Descriptive => "descriptive",
        })
    }
}

/// Requested output budget in words.
/// short=100, medium=250, descriptive=400 for roast and 350 for feedback.
pub fn word_limit(mode: Mode, length: ResponseLength) -> u32 {
    match length {
        ResponseLength::Short => 100,
        ResponseLength::Medium => 250,
        ResponseLength::Descriptive => match mode {
            Mode::Roast => 400,
            Mode::Feedback => 350,
        },
    }
}

/// Builds the full instruction string sent to the model.
///
/// Embeds a guard telling the model to answer in under 30 words when the
/// upload is not actually a resume; that reply still comes back as a normal
/// 200 result.
pub fn build_prompt(resume_text: &str, mode: Mode, length: ResponseLength) -> String {
    let roast = mode == Mode::Roast;

    let role_description = if roast {
        "savage, no-filter resume roaster"
    } else {
        "constructive resume analyzer"
    };
    let job_description = if roast {
        "tear apart"
    } else {
        "analyze and provide insights on"
    };
    let language_style = if roast {
        "plain, raw, and brutally honest"
    } else {
        "constructive and encouraging"
    };
    let additional_instruction = if roast {
        "Don't hold back."
    } else {
        "Focus on areas of improvement while highlighting strengths."
    };

    let not_resume_tone = if roast { "crazy savage" } else { "polite but firm" };
    let attack_verb = if roast { "Rip apart" } else { "Analyze" };
    let humor = if roast { "darkly funny" } else { "insightful" };
    let register = if roast { "basic, raw" } else { "professional" };
    let balance = if roast {
        "Avoid sugarcoating anything—be blunt and ruthless."
    } else {
        "Provide a balanced analysis, highlighting both strengths and areas for improvement."
    };
    // The final bullet is present in both modes; feedback leaves it empty.
    let closer = if roast {
        "Drop sarcastic career advice that stings but makes sense."
    } else {
        ""
    };

    let limit = word_limit(mode, length);

    format!(
        "You are a {role_description}.\n\
         Your job is to {job_description} the following resume in {language_style} language.\n\
         {additional_instruction}\n\
         Use simple English.\n\
         Resume Text:\n\
         {resume_text}\n\
         \n\
         Guidelines:\n\
         - If it is not a resume, give a {not_resume_tone} reply in short under 30 words and return, don't go further.\n\
         - {attack_verb} every weak point, vague phrase, or generic line.\n\
         - Make it {humor} but straightforward, using {register} English.\n\
         - {balance}\n\
         - Keep it under {limit} words if it is a resume only, else 30 words.\n\
         - {closer}"
    )
}
