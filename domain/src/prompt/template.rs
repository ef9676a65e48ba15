//! Prompt templates for the solver flow
//!
//! Every prompt embeds the rendered state snapshot where it needs one; no
//! template keeps any memory of its own.

use crate::solver::candidate::CandidateSet;
use crate::solver::plan::FINAL_REPORT_STEP;

/// Templates for generating prompts at each stage
pub struct SolverPromptTemplate;

impl SolverPromptTemplate {
    /// Decomposition prompt: goal → ordered JSON list of atomic steps
    pub fn decompose(snapshot_context: &str, goal: &str) -> String {
        format!(
            r#"You are a Strategic Planner.
{snapshot_context}

<goal>
{goal}
</goal>

<task>
Break this goal down into 4 to 10 sequential, atomic steps. The final step must be exactly: "{FINAL_REPORT_STEP}"
Return ONLY a raw JSON list of strings.

Example JSON Output: ["Research topic X", "Draft introduction", "Summarize key points", "{FINAL_REPORT_STEP}"]
</task>"#
        )
    }

    /// Routing prompt: step list → per-step profile classifications
    pub fn route(steps: &[String]) -> String {
        let mut listed = String::new();
        for (index, step) in steps.iter().enumerate() {
            listed.push_str(&format!("{index}. {step}\n"));
        }

        format!(
            r#"You are an expert LLM Orchestrator and Router. Analyze the cognitive load of each task below and route it to the most efficient profile.

**The Profiles:**
* **fast:** Best for syntactic tasks, formatting, simple information extraction, chronological sorting, and strict pattern matching. Use this for low-perplexity tasks where the answer is explicitly in the text.
* **reasoning:** Best for semantic tasks, ambiguity resolution, complex synthesis, multi-step logic, calculating trends involving causality, and qualitative analysis. Use this for high-entropy tasks requiring chain-of-thought reasoning.

<Input Tasks>
{listed}</Input Tasks>

<Instructions>
1. Analyze the cognitive load required for each task.
2. Assign "fast" or "reasoning" to each task.
3. Provide a brief 1-sentence rationale using terms like "formatting," "semantic inference," or "synthesis."
</Instructions>

<Output Format>
Return a valid JSON object with the key "classifications" containing a list of objects, each with "step_index" (0-based, matching the task order above), "profile" ("fast" or "reasoning"), and "rationale".

Example JSON Output: {{"classifications": [{{"step_index": 0, "profile": "fast", "rationale": "formatting"}}, {{"step_index": 1, "profile": "reasoning", "rationale": "semantic inference"}}]}}
</Output Format>"#
        )
    }

    /// Solver prompt: one candidate answer for one step
    pub fn solve(snapshot_context: &str, step: &str) -> String {
        format!(
            r#"You are an Expert Solver.
{snapshot_context}

<CURRENT ATOMIC TASK>
{step}
</CURRENT ATOMIC TASK>

<CONSTRAINT>
Your response must allow for easy verification.
Structure your answer as:
 <Key Concept/Direct Answer />
 <Supporting Evidence />
</CONSTRAINT>"#
        )
    }

    /// Judge prompt: labeled candidates → a single winning identifier letter
    pub fn judge(step: &str, candidates: &CandidateSet) -> String {
        let mut responses = String::new();
        for (label, text) in candidates.labeled() {
            responses.push_str(&format!(
                "    <Response_{label}>\n{text}\n    </Response_{label}>\n\n"
            ));
        }

        format!(
            r#"<ROLE>
You are a senior quality assurance expert. I will provide you with a complex task and several candidate answers generated by different AI agents. Evaluate the candidates against the criteria below and select the best one.
</ROLE>

<CANDIDATE RESPONSES to-task="{step}">
{responses}</CANDIDATE RESPONSES>

<EVALUATION CRITERIA>
1. **Accuracy:** Does the response directly address the task without hallucination?
2. **Consistency:** Does it align with the context provided?
3. **Clarity:** Is the writing concise and actionable?
4. **Biases:** Do not favor longer responses solely for their length. Prioritize conciseness.
</EVALUATION CRITERIA>

<VOTING INSTRUCTIONS>
1. Analyze the differences between the candidates.
2. If two responses agree and one contradicts, heavily penalize the outlier, unless the outlier is obviously factually superior.
3. Select the winner.
</VOTING INSTRUCTIONS>

<OUTPUT FORMAT>
Reply with ONLY the single identifier letter of the winning response.
</OUTPUT FORMAT>"#
        )
    }

    /// Repair prompt: one self-correction attempt after a failed validation
    pub fn repair(diagnostic: &str, rejected: &str) -> String {
        format!("Fix this error in the previous output: {diagnostic}\nOutput: {rejected}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_carries_goal_and_final_step() {
        let prompt = SolverPromptTemplate::decompose("STATE", "Summarize project X");
        assert!(prompt.contains("Summarize project X"));
        assert!(prompt.contains("STATE"));
        assert!(prompt.contains(FINAL_REPORT_STEP));
    }

    #[test]
    fn test_route_lists_all_steps_in_order() {
        let steps = vec!["Research X".to_string(), "Sort findings".to_string()];
        let prompt = SolverPromptTemplate::route(&steps);
        assert!(prompt.contains("0. Research X"));
        assert!(prompt.contains("1. Sort findings"));
        assert!(prompt.contains("\"classifications\""));
    }

    #[test]
    fn test_solve_embeds_snapshot_and_task() {
        let prompt = SolverPromptTemplate::solve("STATE", "Research X");
        assert!(prompt.contains("STATE"));
        assert!(prompt.contains("<CURRENT ATOMIC TASK>\nResearch X"));
        assert!(prompt.contains("Supporting Evidence"));
    }

    #[test]
    fn test_judge_labels_candidates_opaquely() {
        let candidates = CandidateSet::new(vec![
            "first answer".to_string(),
            "second answer".to_string(),
            "third answer".to_string(),
        ])
        .unwrap();

        let prompt = SolverPromptTemplate::judge("Research X", &candidates);
        assert!(prompt.contains("<Response_A>"));
        assert!(prompt.contains("<Response_B>"));
        assert!(prompt.contains("<Response_C>"));
        assert!(prompt.contains("first answer"));
        // No generation metadata leaks into the judge prompt
        assert!(!prompt.contains("temperature"));
    }

    #[test]
    fn test_repair_carries_diagnostic_and_output() {
        let prompt = SolverPromptTemplate::repair("Error: Empty output generated.", "bad text");
        assert!(prompt.contains("Error: Empty output generated."));
        assert!(prompt.contains("Output: bad text"));
    }
}
