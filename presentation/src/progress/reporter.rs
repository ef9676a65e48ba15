//! Progress reporting for solver runs

use ballot_application::ports::progress::SolveProgressNotifier;
use ballot_domain::{StepRecord, StepState, TaskClassification};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports solver progress with a step progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn step_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn state_tag(state: StepState) -> String {
        match state {
            StepState::Validated => "v".green().to_string(),
            StepState::Repaired => "r".yellow().to_string(),
            StepState::Skipped => "x".red().to_string(),
            _ => "?".to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveProgressNotifier for ProgressReporter {
    fn on_plan_ready(&self, steps: &[String], degraded: bool) {
        if degraded {
            println!(
                "{}",
                "Decomposition fell back to a single-step plan".yellow()
            );
        }

        let bar = ProgressBar::new(steps.len() as u64);
        bar.set_style(Self::step_style());
        bar.set_prefix("Solving");
        bar.set_message("Starting...");
        *self.bar.lock().unwrap() = Some(bar);
    }

    fn on_routing_ready(&self, classifications: &[TaskClassification]) {
        let reasoning = classifications
            .iter()
            .filter(|c| c.profile.uses_reasoning())
            .count();
        if let Some(bar) = self.bar.lock().unwrap().as_ref() {
            bar.set_message(format!(
                "routed: {reasoning} reasoning / {} fast",
                classifications.len() - reasoning
            ));
        }
    }

    fn on_step_start(&self, _index: usize, _total: usize, instruction: &str) {
        if let Some(bar) = self.bar.lock().unwrap().as_ref() {
            let short: String = instruction.chars().take(48).collect();
            bar.set_message(short);
        }
    }

    fn on_step_complete(&self, record: &StepRecord) {
        let lock = self.bar.lock().unwrap();
        if let Some(bar) = lock.as_ref() {
            bar.set_message(format!("{} step {}", Self::state_tag(record.state), record.index + 1));
            bar.inc(1);
            if bar.position() == bar.length().unwrap_or(0) {
                bar.finish_with_message("done".green().to_string());
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SolveProgressNotifier for SimpleProgress {
    fn on_plan_ready(&self, steps: &[String], degraded: bool) {
        if degraded {
            println!("Plan degraded to a single step");
        } else {
            println!("Plan ready: {} steps", steps.len());
        }
    }

    fn on_routing_ready(&self, classifications: &[TaskClassification]) {
        for classification in classifications {
            println!(
                "  [{}] {} ({})",
                classification.step_index, classification.profile, classification.rationale
            );
        }
    }

    fn on_step_start(&self, index: usize, total: usize, instruction: &str) {
        println!("Step {}/{total}: {instruction}", index + 1);
    }

    fn on_step_complete(&self, record: &StepRecord) {
        println!("  -> {}", record.state);
    }
}
