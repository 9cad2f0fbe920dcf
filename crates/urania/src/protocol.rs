//! Daily "lab protocol" blurb, seeded by the calendar date.

use crate::ephemeris::date_seed;
use crate::predictions::pseudo_random;
use chrono::{DateTime, Datelike, Utc, Weekday};
use serde::Serialize;

pub const EXPERIMENTS: [&str; 10] = [
    "Optimizing caffeine intake via serial titration",
    "Observing the effects of deadline pressure on cortisol synthesis",
    "Calibrating the pipette of destiny",
    "Sequencing the genome of the office plant",
    "Quantifying the viscosity of lab coffee",
    "Extracting DNA from a strawberry for the 100th time",
    "Debugging code by explaining it to a rubber duck",
    "Training the AI to appreciate cat memes",
    "Synthesizing a new playlist for late-night data analysis",
    "Measuring the half-life of motivation on a Monday",
];

pub const AVOIDANCES: [&str; 10] = [
    "Opening the -80°C freezer without gloves",
    "Trusting the 'label soon' pile",
    "Updating R just before a deadline",
    "Looking directly into the laser (metaphorically or literally)",
    "Asking 'what smell is that?'",
    "Assuming the backup worked",
    "Touching the communal keyboard",
    "Eating lunch at the bench",
    "Replying 'Reply All' to the departmental list",
    "Believing the p-value without the effect size",
];

const WEEKDAY_TITLE: &str = "Recommended Protocol";
const WEEKEND_TITLE: &str = "Lab Safety Warning (Weekend Protocol)";
const WEEKEND_NOTICE: &str = "DO NOT ENTER THE LAB. The incubators require personal space. Your cells are judging you for working overtime.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyProtocol {
    pub title: String,
    pub experiment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoidance: Option<String>,
    pub weekend: bool,
}

pub fn is_weekend(datetime: DateTime<Utc>) -> bool {
    matches!(datetime.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn daily_protocol(datetime: DateTime<Utc>) -> DailyProtocol {
    if is_weekend(datetime) {
        return DailyProtocol {
            title: WEEKEND_TITLE.to_string(),
            experiment: WEEKEND_NOTICE.to_string(),
            avoidance: None,
            weekend: true,
        };
    }

    let r = pseudo_random(date_seed(datetime));
    let len = EXPERIMENTS.len();
    let experiment = ((r * len as f64).floor() as usize).min(len - 1);
    let avoidance = ((r + 0.5) * AVOIDANCES.len() as f64).floor() as usize % AVOIDANCES.len();

    DailyProtocol {
        title: WEEKDAY_TITLE.to_string(),
        experiment: format!("{}.", EXPERIMENTS[experiment]),
        avoidance: Some(format!("{}.", AVOIDANCES[avoidance])),
        weekend: false,
    }
}
