use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

use crate::errors::PlanError;
use crate::plan::WeekPlan;
use crate::profile::Profile;

// The model emits three markdown conventions: #### headings, **bold**
// spans and "* " list items. Everything else passes through untouched.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*####\s*(.*)$").unwrap());
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*\*\s+(.*)$").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Converts the model's markdown fragment into styled terminal text.
pub fn render_markdown(text: &str) -> String {
    let out = HEADING_RE.replace_all(text, |c: &regex::Captures| {
        c[1].trim().yellow().bold().underline().to_string()
    });
    let out = BULLET_RE.replace_all(&out, |c: &regex::Captures| format!("  • {}", &c[1]));
    let out = BOLD_RE.replace_all(&out, |c: &regex::Captures| c[1].bold().to_string());
    out.into_owned()
}

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Renders the whole result. Consumes only the parse result, the
/// profile and a source label; an empty plan is shown as a format
/// error, never an abort.
pub fn show_week(week: &WeekPlan, profile: &Profile, source: &str) {
    println!(
        "\n{}  {}",
        "7-DAY ALIGNED SCHEDULE".bold(),
        format!("{} · {} · {}", profile.goal, profile.equipment, profile.cuisine).dimmed()
    );

    if week.days.is_empty() {
        println!("\n{}", "AI output format error. Please try again.".red().bold());
        return;
    }

    for day in &week.days {
        println!("\n{}", format!("🗓️ {}", day.day.trim()).yellow().bold());
        println!("{}", "🏋️ WORKOUT".cyan().bold());
        println!("{}", render_markdown(&day.workout));
        println!("{}", "🥗 MEALS".cyan().bold());
        println!("{}", render_markdown(&day.meal));
        println!("{}", "─".repeat(44).dimmed());
    }

    println!("\n{}", "🛒 GROCERY".yellow().bold());
    if week.has_grocery() {
        println!("{}", render_markdown(&week.grocery));
    } else {
        println!("{}", week.grocery.dimmed());
    }
    println!("\n{}", format!("Generated successfully using {source}").green());
}

pub fn show_request_error(err: &PlanError) {
    eprintln!("{}", err.to_string().red().bold());
}
