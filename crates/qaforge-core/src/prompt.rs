// ABOUTME: Builds the two model prompts: one asking for N scenarios, one asking for an automation script.
// ABOUTME: The script prompt embeds every scenario record in batch order as CSV-style lines.

use crate::scenario::ScenarioBatch;

/// Renders prompts for a configured target application.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    target_app: String,
}

impl PromptBuilder {
    pub fn new(target_app: impl Into<String>) -> Self {
        Self {
            target_app: target_app.into(),
        }
    }

    pub fn target_app(&self) -> &str {
        &self.target_app
    }

    /// Prompt asking for exactly `count` distinct scenarios for `area`, one per line.
    pub fn scenario_prompt(&self, area: &str, count: u32) -> String {
        format!(
            "You are a QA engineer automating the UI testing of the **{app}**.\n\
             \n\
             Generate exactly **{count} unique and meaningful test scenarios** focused on the **'{area}'** functionality.\n\
             \n\
             Assume real-world usage. Be creative and comprehensive.\n\
             \n\
             Format: each line is a single test scenario, phrased as a full sentence in imperative form.\n\
             \n\
             Example:\n\
             - Verify that a user can search for a song using the search bar and press Enter to navigate to the result.\n\
             - Ensure that clicking the Play button starts the currently selected track.\n\
             \n\
             Rules:\n\
             - Scenarios simulate end-user behavior using keyboard-based actions.\n\
             - Do not duplicate ideas or actions across scenarios.\n\
             - Each test is clear, distinct, and practically automatable.\n\
             \n\
             Only output the test scenarios: no headings, no explanations.\n",
            app = self.target_app,
            count = count,
            area = area,
        )
    }

    /// Prompt asking for a pytest automation script covering every scenario in `batch`.
    pub fn script_prompt(&self, batch: &ScenarioBatch) -> String {
        let mut scenarios = String::from("Test Case ID,Area,Description\n");
        for record in batch.records() {
            scenarios.push_str(&format!("{},{},{}\n", record.id, record.area, record.description));
        }

        format!(
            "You are an expert Python developer skilled in Windows desktop automation and UI testing.\n\
             \n\
             Your task: write a single **pytest-based test script** in Python that automates the \
             following test scenarios against the **{app}**.\n\
             \n\
             Scenarios:\n\
             {scenarios}\
             \n\
             Coding instructions:\n\
             1. Use `pywinauto` (Application, keyboard.send_keys), `pyautogui`, `pytest` and `time`; add others only if necessary.\n\
             2. Provide a helper that connects to the running application with the \"uia\" backend, \
             falls back to \"win32\", and starts the application if neither connects.\n\
             3. Provide a pytest fixture that yields the focused main window after a short startup delay.\n\
             4. Write one test function per scenario, named after its Test Case ID, with a comment for each step.\n\
             5. End each test with an assertion (a placeholder such as `assert True` is acceptable).\n\
             \n\
             Output valid Python code only. Do not include markdown or explanations.\n",
            app = self.target_app,
            scenarios = scenarios,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> PromptBuilder {
        PromptBuilder::new("Spotify Windows Desktop application")
    }

    #[test]
    fn scenario_prompt_mentions_area_count_and_app() {
        let prompt = builder().scenario_prompt("Search", 7);

        assert!(prompt.contains("'Search'"));
        assert!(prompt.contains("exactly **7"));
        assert!(prompt.contains("Spotify Windows Desktop application"));
    }

    #[test]
    fn script_prompt_lists_records_in_order() {
        let batch = ScenarioBatch::from_descriptions(
            "Playback",
            ["Verify play starts audio", "Verify pause stops audio", "Verify next skips"],
        );
        let prompt = builder().script_prompt(&batch);

        let first = prompt.find("TC_1,Playback,Verify play starts audio").unwrap();
        let second = prompt.find("TC_2,Playback,Verify pause stops audio").unwrap();
        let third = prompt.find("TC_3,Playback,Verify next skips").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn prompts_are_pure() {
        let b = builder();
        let batch = ScenarioBatch::from_descriptions("Search", ["a"]);
        assert_eq!(b.scenario_prompt("Search", 2), b.scenario_prompt("Search", 2));
        assert_eq!(b.script_prompt(&batch), b.script_prompt(&batch));
    }
}
