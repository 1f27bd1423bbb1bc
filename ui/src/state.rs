use payloads::{AnalysisResult, SelectedFile};
use yewdux::prelude::*;

/// Where one analysis cycle currently stands.
///
/// ```text
/// Idle -> FileSelected -> Submitting -> Displaying
///                                           |  ^
///                                           v  |
///                                     RetryingAiOnly
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPhase {
    /// No file chosen and nothing displayed from a previous session.
    #[default]
    Idle,
    /// A validated file is selected, no result yet.
    FileSelected,
    /// The primary submission is in flight.
    Submitting,
    /// A result or error record is shown, no request in flight.
    Displaying,
    /// An AI-only retry is in flight; the previous result stays visible.
    RetryingAiOnly,
}

/// The submission state machine. Owns the selected file, the displayed
/// record, and nothing else; all mutation goes through the transition
/// methods so the phase and the data cannot drift apart.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub phase: AnalysisPhase,
    pub selected: Option<SelectedFile>,
    pub result: Option<AnalysisResult>,
}

impl State {
    /// A valid file was picked: replace any previous selection and clear
    /// the displayed result.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected = Some(file);
        self.result = None;
        self.phase = AnalysisPhase::FileSelected;
    }

    /// A file was rejected by intake validation: the selection signal is
    /// explicitly reset; a displayed result is left alone.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.phase = match self.result {
            Some(_) => AnalysisPhase::Displaying,
            None => AnalysisPhase::Idle,
        };
    }

    /// Start the primary submission. Returns false (and does nothing)
    /// without a selected file or with a request already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.selected.is_none() || self.is_request_in_flight() {
            return false;
        }
        self.phase = AnalysisPhase::Submitting;
        true
    }

    /// Start an AI-only retry. The previously displayed result stays up
    /// while the request runs.
    pub fn begin_ai_retry(&mut self) -> bool {
        if self.selected.is_none() || self.is_request_in_flight() {
            return false;
        }
        self.phase = AnalysisPhase::RetryingAiOnly;
        true
    }

    /// A submission or retry finished (successfully or as an error
    /// record); always lands in `Displaying`.
    pub fn finish_request(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.phase = AnalysisPhase::Displaying;
    }

    /// Startup path: show the persisted last-good record before any
    /// request is made. There is no selected file in this state.
    pub fn restore(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.selected = None;
        self.phase = AnalysisPhase::Displaying;
    }

    pub fn is_request_in_flight(&self) -> bool {
        matches!(
            self.phase,
            AnalysisPhase::Submitting | AnalysisPhase::RetryingAiOnly
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> SelectedFile {
        SelectedFile::new("contrato.pdf", "application/pdf", vec![1, 2, 3])
    }

    #[test]
    fn selecting_a_file_clears_the_displayed_result() {
        let mut state = State::default();
        state.restore(AnalysisResult::default());
        assert!(state.result.is_some());

        state.select_file(pdf());
        assert_eq!(state.phase, AnalysisPhase::FileSelected);
        assert!(state.result.is_none());
    }

    #[test]
    fn submit_requires_a_file() {
        let mut state = State::default();
        assert!(!state.begin_submit());
        assert_eq!(state.phase, AnalysisPhase::Idle);

        state.select_file(pdf());
        assert!(state.begin_submit());
        assert_eq!(state.phase, AnalysisPhase::Submitting);
    }

    #[test]
    fn double_submit_is_guarded() {
        let mut state = State::default();
        state.select_file(pdf());
        assert!(state.begin_submit());
        // A second click while the request is outstanding is a no-op
        assert!(!state.begin_submit());
        assert!(!state.begin_ai_retry());
    }

    #[test]
    fn finishing_lands_in_displaying_even_for_error_records() {
        let mut state = State::default();
        state.select_file(pdf());
        state.begin_submit();
        state.finish_request(AnalysisResult::error("Erro na Análise: x"));
        assert_eq!(state.phase, AnalysisPhase::Displaying);
        assert!(state.result.as_ref().unwrap().is_error());
        // The file is still selected for a follow-up attempt
        assert!(state.selected.is_some());
    }

    #[test]
    fn ai_retry_keeps_the_previous_result_visible() {
        let mut state = State::default();
        state.select_file(pdf());
        state.begin_submit();
        state.finish_request(AnalysisResult::default());

        assert!(state.begin_ai_retry());
        assert_eq!(state.phase, AnalysisPhase::RetryingAiOnly);
        assert!(state.result.is_some());
    }

    #[test]
    fn rejected_file_resets_the_selection_only() {
        let mut state = State::default();
        state.restore(AnalysisResult::default());
        state.clear_selection();
        assert_eq!(state.phase, AnalysisPhase::Displaying);
        assert!(state.result.is_some());

        let mut state = State::default();
        state.select_file(pdf());
        state.clear_selection();
        assert_eq!(state.phase, AnalysisPhase::Idle);
        assert!(state.selected.is_none());
    }

    #[test]
    fn restore_displays_without_a_file() {
        let mut state = State::default();
        state.restore(AnalysisResult::default());
        assert_eq!(state.phase, AnalysisPhase::Displaying);
        assert!(state.selected.is_none());
        // Retrying without a file is impossible
        assert!(!state.begin_ai_retry());
    }
}
