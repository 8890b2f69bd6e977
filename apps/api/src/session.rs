//! UI-facing interaction state as explicit data with pure transitions.
#![allow(dead_code)]
//!
//! The browser front end drives this as a unidirectional update cycle:
//! every user gesture and every request outcome is a `SessionEvent`,
//! and `reduce` is the only way state changes. There are no ambient
//! globals — a snapshot goes in, the next snapshot comes out.

use serde::{Deserialize, Serialize};

use crate::models::analysis::{AnalysisFormInput, AnalysisResult, BuildOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Main,
    Settings,
}

/// The build-option dropdown as an explicit two-state machine. The one
/// external trigger is a click outside the control, which always lands
/// in `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropdownState {
    Closed,
    Open,
}

impl DropdownState {
    fn toggled(self) -> Self {
        match self {
            DropdownState::Closed => DropdownState::Open,
            DropdownState::Open => DropdownState::Closed,
        }
    }
}

/// One snapshot of the interaction state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub form: AnalysisFormInput,
    /// True while the one submission this session may have in flight is
    /// outstanding. Submit events are ignored until it settles.
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<AnalysisResult>,
    pub sidebar_open: bool,
    pub page: Page,
    pub dropdown: DropdownState,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            form: AnalysisFormInput {
                company_name: String::new(),
                build_option: BuildOption::AccountDossier,
            },
            loading: false,
            error: None,
            result: None,
            sidebar_open: true,
            page: Page::Main,
            dropdown: DropdownState::Closed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    CompanyNameEdited(String),
    OptionSelected(BuildOption),
    DropdownToggled,
    /// Click landed outside the dropdown control.
    ClickedOutside,
    SubmitRequested,
    AnalysisSucceeded(AnalysisResult),
    AnalysisFailed(String),
    NewSearchRequested,
    SidebarToggled,
    Navigated(Page),
}

/// The single transition function. Pure: same state + same event, same
/// output.
pub fn reduce(mut state: SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::CompanyNameEdited(name) => {
            state.form.company_name = name;
        }
        SessionEvent::OptionSelected(option) => {
            state.form.build_option = option;
            state.dropdown = DropdownState::Closed;
        }
        SessionEvent::DropdownToggled => {
            state.dropdown = state.dropdown.toggled();
        }
        SessionEvent::ClickedOutside => {
            state.dropdown = DropdownState::Closed;
        }
        SessionEvent::SubmitRequested => {
            if state.loading {
                // One outstanding request at a time.
                return state;
            }
            if state.form.company_name.trim().is_empty() {
                state.error = Some("Company Name is required.".to_string());
                return state;
            }
            state.loading = true;
            state.error = None;
        }
        SessionEvent::AnalysisSucceeded(result) => {
            state.loading = false;
            // Replaced wholesale — never merged with a previous result.
            state.result = Some(result);
        }
        SessionEvent::AnalysisFailed(message) => {
            state.loading = false;
            state.error = Some(message);
            // A failed submission leaves no stale data behind.
            state.result = None;
        }
        SessionEvent::NewSearchRequested => {
            state.form = AnalysisFormInput {
                company_name: String::new(),
                build_option: BuildOption::AccountDossier,
            };
            state.result = None;
            state.error = None;
            state.page = Page::Main;
        }
        SessionEvent::SidebarToggled => {
            state.sidebar_open = !state.sidebar_open;
        }
        SessionEvent::Navigated(page) => {
            state.page = page;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_state() -> SessionState {
        reduce(
            SessionState::default(),
            SessionEvent::CompanyNameEdited("Acme Corp".to_string()),
        )
    }

    fn sample_result() -> AnalysisResult {
        serde_json::from_str(
            r#"{"dossier": {"companyName": "Acme Corp", "industry": "Manufacturing", "employeeCount": "1001-5000"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_blank_company_name_fails_validation_before_any_request() {
        let state = reduce(SessionState::default(), SessionEvent::SubmitRequested);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Company Name is required."));
    }

    #[test]
    fn test_whitespace_company_name_is_still_blank() {
        let state = reduce(
            SessionState::default(),
            SessionEvent::CompanyNameEdited("   ".to_string()),
        );
        let state = reduce(state, SessionEvent::SubmitRequested);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Company Name is required."));
    }

    #[test]
    fn test_submit_starts_loading_and_clears_the_previous_error() {
        let mut state = ready_state();
        state.error = Some("Failed to generate company analysis: boom".to_string());
        let state = reduce(state, SessionEvent::SubmitRequested);
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let loading = reduce(ready_state(), SessionEvent::SubmitRequested);
        let again = reduce(loading.clone(), SessionEvent::SubmitRequested);
        assert_eq!(loading, again);
    }

    #[test]
    fn test_success_replaces_the_result_wholesale() {
        let state = reduce(ready_state(), SessionEvent::SubmitRequested);
        let state = reduce(state, SessionEvent::AnalysisSucceeded(sample_result()));
        assert!(!state.loading);
        assert_eq!(state.result, Some(sample_result()));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_failure_clears_the_stale_result() {
        let state = reduce(ready_state(), SessionEvent::SubmitRequested);
        let state = reduce(state, SessionEvent::AnalysisSucceeded(sample_result()));

        // Second submission fails — the first result must not survive.
        let state = reduce(state, SessionEvent::SubmitRequested);
        let state = reduce(
            state,
            SessionEvent::AnalysisFailed("Failed to generate company analysis: boom".to_string()),
        );
        assert!(!state.loading);
        assert!(state.result.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to generate company analysis: boom")
        );
    }

    #[test]
    fn test_dropdown_toggles_between_its_two_states() {
        let state = reduce(SessionState::default(), SessionEvent::DropdownToggled);
        assert_eq!(state.dropdown, DropdownState::Open);
        let state = reduce(state, SessionEvent::DropdownToggled);
        assert_eq!(state.dropdown, DropdownState::Closed);
    }

    #[test]
    fn test_click_outside_always_lands_closed() {
        let open = reduce(SessionState::default(), SessionEvent::DropdownToggled);
        let state = reduce(open, SessionEvent::ClickedOutside);
        assert_eq!(state.dropdown, DropdownState::Closed);

        // From Closed it is a no-op, not an error.
        let state = reduce(state, SessionEvent::ClickedOutside);
        assert_eq!(state.dropdown, DropdownState::Closed);
    }

    #[test]
    fn test_selecting_an_option_closes_the_dropdown() {
        let open = reduce(SessionState::default(), SessionEvent::DropdownToggled);
        let state = reduce(open, SessionEvent::OptionSelected(BuildOption::All));
        assert_eq!(state.form.build_option, BuildOption::All);
        assert_eq!(state.dropdown, DropdownState::Closed);
    }

    #[test]
    fn test_new_search_resets_form_result_error_and_page() {
        let state = reduce(ready_state(), SessionEvent::Navigated(Page::Settings));
        let state = reduce(state, SessionEvent::SubmitRequested);
        let state = reduce(state, SessionEvent::AnalysisSucceeded(sample_result()));
        let state = reduce(state, SessionEvent::NewSearchRequested);

        assert_eq!(state.form.company_name, "");
        assert_eq!(state.form.build_option, BuildOption::AccountDossier);
        assert!(state.result.is_none());
        assert!(state.error.is_none());
        assert_eq!(state.page, Page::Main);
    }

    #[test]
    fn test_sidebar_toggle() {
        let state = SessionState::default();
        assert!(state.sidebar_open);
        let state = reduce(state, SessionEvent::SidebarToggled);
        assert!(!state.sidebar_open);
    }
}
