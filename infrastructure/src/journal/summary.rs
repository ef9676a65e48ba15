//! Monthly summary prompt assembly
//!
//! Builds the goal and context strings for a summary solver run. The
//! context explains the log structure, fixes the report template the final
//! step must populate, and carries the aggregated logs as the only data
//! source.

use super::store::month_name;

/// The fixed analysis goal handed to the solver
pub fn summary_goal() -> String {
    "As a helpful productivity coach, your task is to perform a deep and insightful analysis \
     of the personal logs to help me understand my work patterns, celebrate successes, identify \
     challenges, and improve in the future.\n\
     Generate a report with the exact following structure and headers. For each section, provide \
     thoughtful, data-driven analysis based only on the personal logs provided."
        .to_string()
}

/// The context block for a summary run over `aggregated` logs
pub fn summary_context(year: i32, month: u32, aggregated: &str) -> String {
    let period = format!("{}/{year}", month_name(month));

    format!(
        r#"I am providing you with a collection of my personal logs from a specific period, which includes both daily and weekly entries.

First, understand the structure of my logs:

* **Daily Logs** contain:
    * `What I did`: A list of completed tasks.
    * `What's next`: Planned future tasks.
    * `What broke or got weird`: Challenges, bugs, and blockers.
    * `Productivity Score`: A self-rated score from 1-5 for the day. A history may be present, where old scores are struck through (e.g., `- ~~3/5~~`, `- 4/5`). Please use the final, unstruck score for any daily analysis.
* **Weekly Logs** contain:
    * **Start of Week (SOW):** `My Goals for the Week`, `Next Steps`, and `Other Tasks`.
    * **End of Week (EOW):** A review with `What went well?`, `What are you happy about?`, `What made you laugh?`, and `Progress observed`.

<Report_Template>
# Productivity & Progress Analysis for {period}

## 🎯 Executive Summary
Provide a 2-3 sentence high-level summary of the period. What was the main story of this month/week? Was it a period of high achievement, overcoming challenges, or steady progress?

## ✅ Accomplishments vs. Goals
Analyze the alignment between my stated weekly goals and my daily actions.

* **Goals Achieved:** List the weekly goals that were clearly met, citing specific entries from "What I did" or "What went well" as evidence.
* **Goals Partially Achieved or Missed:** Identify goals that were not fully completed or mentioned. Speculate on why, based on the "What broke" sections or a lack of related daily tasks.
* **Unplanned Accomplishments:** Highlight significant achievements from the "What I did" logs that were not part of the stated weekly goals.

## 📈 Productivity Analysis
Perform a quantitative and qualitative analysis of my productivity scores.

* **Score Overview:** What was my average productivity score? What was the range of scores (highest and lowest)?
* **Trend Analysis:** Was there a noticeable trend in productivity (e.g., increasing over the month, higher at the start of the week vs. the end)?
* **Correlation:** Correlate the highest-rated productivity days with the activities performed on those days. What kind of work leads to a feeling of high productivity? Conversely, what activities or events from the "What broke" section correspond with the lowest-rated days?

## 🚧 Recurring Challenges & Blockers
Synthesize all entries from "What broke or got weird" across the daily logs.

* **Identify Themes:** Group similar problems together to identify recurring patterns. Are there repeated technical issues, specific types of interruptions, or common sources of frustration?
* **Impact Assessment:** Briefly describe the likely impact of these recurring issues on my goals and productivity.

## 😊 Sources of Success & Happiness
Analyze the qualitative data from the End of Week reviews to understand the drivers of success and well-being.

* **What Drives Success:** What are the common themes in the "What went well" and "Progress observed" sections?
* **Sources of Joy:** What patterns do you see in the "What are you happy about?" and "What made you laugh?" sections? This helps identify what makes the work sustainable and enjoyable.

## 🌱 Actionable Recommendations
Based on your entire analysis, provide a short list of concrete, actionable recommendations for the next period.

1.  **To Capitalize on Strengths:** Suggest one action to double down on what's already working well.
2.  **To Address Challenges:** Propose one specific strategy to mitigate the most significant recurring blocker you identified.
3.  **To Improve Alignment:** Recommend one way I can better align my daily tasks with my weekly goals.
4.  **A Question for Reflection:** Pose one insightful question for me to think about during my next planning session.
</Report_Template>

<personal_logs>{aggregated}
</personal_logs>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_names_the_coach_role() {
        let goal = summary_goal();
        assert!(goal.contains("productivity coach"));
        assert!(goal.contains("structure and headers"));
    }

    #[test]
    fn test_context_embeds_period_and_logs() {
        let context = summary_context(2025, 7, "--- Content from a.md ---\nlog text");
        assert!(context.contains("Productivity & Progress Analysis for July/2025"));
        assert!(context.contains("<personal_logs>--- Content from a.md ---\nlog text"));
        assert!(context.contains("Actionable Recommendations"));
    }
}
