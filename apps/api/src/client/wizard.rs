//! Linear questionnaire wizard.
//!
//! ```text
//! Landing → Form → Assessment → Analyzing → Results → (restart) Landing
//!    ↕                             ↓ failure
//! HowItWorks / Methodology      Assessment (with error)
//! ```

use thiserror::Error;
use tracing::{error, info};

use crate::assessment::questions::{find_question, QUESTIONS};
use crate::client::store::ResultStore;
use crate::client::{AnalysisBackend, TransportError};
use crate::models::{AnalysisResult, StudentInfo, UserResponse};

pub const ANALYSIS_FAILED_MESSAGE: &str =
    "We encountered an issue analyzing your results. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    HowItWorks,
    Methodology,
    Form,
    Assessment,
    Analyzing,
    Results,
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Cannot {action} from {from:?}")]
    InvalidTransition { from: Screen, action: &'static str },

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Question {question_id} has no option {index}")]
    InvalidOption { question_id: String, index: usize },

    #[error("Assessment incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub struct Wizard {
    screen: Screen,
    student_info: Option<StudentInfo>,
    responses: Vec<UserResponse>,
    result: Option<AnalysisResult>,
    previous_result: Option<AnalysisResult>,
    error: Option<String>,
}

impl Wizard {
    /// Starts on the landing screen, loading any previously saved result.
    pub fn new(store: &dyn ResultStore) -> Self {
        Self {
            screen: Screen::Landing,
            student_info: None,
            responses: Vec::new(),
            result: None,
            previous_result: store.load(),
            error: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn responses(&self) -> &[UserResponse] {
        &self.responses
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn previous_result(&self) -> Option<&AnalysisResult> {
        self.previous_result.as_ref()
    }

    /// Inline error shown on the assessment screen after a failed analysis.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn require_screen(&self, screen: Screen, action: &'static str) -> Result<(), WizardError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                from: self.screen,
                action,
            })
        }
    }

    pub fn start(&mut self) -> Result<(), WizardError> {
        self.require_screen(Screen::Landing, "start the assessment")?;
        self.screen = Screen::Form;
        Ok(())
    }

    pub fn show_how_it_works(&mut self) -> Result<(), WizardError> {
        self.require_screen(Screen::Landing, "show how it works")?;
        self.screen = Screen::HowItWorks;
        Ok(())
    }

    pub fn show_methodology(&mut self) -> Result<(), WizardError> {
        self.require_screen(Screen::Landing, "show methodology")?;
        self.screen = Screen::Methodology;
        Ok(())
    }

    /// Returns from an informational page to the landing screen.
    pub fn back(&mut self) -> Result<(), WizardError> {
        match self.screen {
            Screen::HowItWorks | Screen::Methodology => {
                self.screen = Screen::Landing;
                Ok(())
            }
            from => Err(WizardError::InvalidTransition {
                from,
                action: "go back",
            }),
        }
    }

    /// Jumps straight to the saved result. Returns false when there is none.
    pub fn view_previous_result(&mut self) -> Result<bool, WizardError> {
        self.require_screen(Screen::Landing, "view the previous result")?;
        match &self.previous_result {
            Some(previous) => {
                self.result = Some(previous.clone());
                self.screen = Screen::Results;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn submit_profile(&mut self, info: StudentInfo) -> Result<(), WizardError> {
        self.require_screen(Screen::Form, "submit the profile")?;
        self.student_info = Some(info);
        self.screen = Screen::Assessment;
        Ok(())
    }

    /// Records the chosen option for a question, replacing any earlier answer.
    pub fn answer(&mut self, question_id: &str, option_index: usize) -> Result<(), WizardError> {
        self.require_screen(Screen::Assessment, "answer a question")?;

        let question = find_question(question_id)
            .ok_or_else(|| WizardError::UnknownQuestion(question_id.to_string()))?;
        let selected = question
            .options
            .get(option_index)
            .ok_or_else(|| WizardError::InvalidOption {
                question_id: question_id.to_string(),
                index: option_index,
            })?;

        let response = UserResponse {
            question_id: question.id.to_string(),
            category: question.category,
            selected_value: selected.to_string(),
        };

        match self
            .responses
            .iter_mut()
            .find(|r| r.question_id == question.id)
        {
            Some(existing) => *existing = response,
            None => self.responses.push(response),
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.responses.len() == QUESTIONS.len()
    }

    /// Submits the answers for analysis.
    ///
    /// On success the result is persisted and the wizard moves to Results. On
    /// failure it returns to Assessment with an inline error; nothing is retried.
    pub async fn finish(
        &mut self,
        backend: &dyn AnalysisBackend,
        store: &dyn ResultStore,
    ) -> Result<&AnalysisResult, WizardError> {
        self.require_screen(Screen::Assessment, "finish the assessment")?;
        if !self.is_complete() {
            return Err(WizardError::Incomplete {
                answered: self.responses.len(),
                total: QUESTIONS.len(),
            });
        }
        let info = self.student_info.clone().unwrap_or_default();

        self.screen = Screen::Analyzing;
        self.error = None;

        match backend.analyze(&info, &self.responses).await {
            Ok(analysis) => {
                if let Err(e) = store.save(&analysis) {
                    error!("Could not persist last result: {e}");
                }
                info!("Analysis received");
                self.previous_result = Some(analysis.clone());
                self.screen = Screen::Results;
                Ok(self.result.insert(analysis))
            }
            Err(e) => {
                error!("Analysis request failed: {e}");
                self.error = Some(ANALYSIS_FAILED_MESSAGE.to_string());
                self.screen = Screen::Assessment;
                Err(e.into())
            }
        }
    }

    /// Back to Landing, clearing everything except the previous result.
    pub fn restart(&mut self) -> Result<(), WizardError> {
        self.require_screen(Screen::Results, "restart")?;
        self.screen = Screen::Landing;
        self.student_info = None;
        self.responses.clear();
        self.result = None;
        self.error = None;
        Ok(())
    }
}
