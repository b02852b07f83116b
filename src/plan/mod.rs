use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Block separator the model is instructed to emit.
pub const SEPARATOR: &str = "|||";
/// Grocery text when no GROCERY block appears.
pub const NO_GROCERY: &str = "No grocery list generated.";

const DEFAULT_WORKOUT: &str = "Rest";
const DEFAULT_MEAL: &str = "Standard Diet";

// Marker tokens are matched case- and spelling-sensitively. The day
// label is the remainder of the first "Day:" line; workout runs up to
// the next "Meal:" marker; meal runs to the end of the block.
static DAY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Day:\s*(.*)").unwrap());
static WORKOUT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)Workout:\s*(.*?)Meal:").unwrap());
static MEAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)Meal:\s*(.*)").unwrap());

/// One day's schedule. The fields are free text carrying the three
/// markdown conventions (`* ` bullets, `**bold**`, `####` headings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    pub workout: String,
    pub meal: String,
}

/// Parse result. `days` may be empty (callers treat that as a format
/// error for display, never a crash); `skipped` counts day blocks that
/// were dropped as malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPlan {
    pub days: Vec<DayPlan>,
    pub grocery: String,
    pub skipped: usize,
}

impl WeekPlan {
    pub fn has_grocery(&self) -> bool {
        self.grocery != NO_GROCERY
    }
}

/// Splits the raw completion on `|||` and classifies each block by
/// prefix. Day blocks that fail extraction are skipped, not surfaced;
/// if several GROCERY blocks appear, the last one wins.
pub fn parse(raw: &str) -> WeekPlan {
    let mut days = Vec::new();
    let mut grocery: Option<String> = None;
    let mut skipped = 0usize;

    for block in raw.split(SEPARATOR) {
        let block = block.trim();
        if let Some(rest) = block.strip_prefix("GROCERY") {
            grocery = Some(rest.trim().to_string());
            continue;
        }
        if !block.starts_with("Day:") {
            continue;
        }
        let Some(day_caps) = DAY_RE.captures(block) else {
            skipped += 1;
            continue;
        };
        let day = day_caps[1].to_string();
        let workout = WORKOUT_RE
            .captures(block)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_else(|| DEFAULT_WORKOUT.to_string());
        let meal = MEAL_RE
            .captures(block)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_else(|| DEFAULT_MEAL.to_string());
        days.push(DayPlan { day, workout, meal });
    }

    WeekPlan {
        days,
        grocery: grocery.unwrap_or_else(|| NO_GROCERY.to_string()),
        skipped,
    }
}
