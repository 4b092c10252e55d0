//! Built-in review actions with fixed prompts.

use crate::{DEFAULT_TEMPERATURE, InvocationRequest, InvocationRequestBuilder};

/// A preset review action: an instruction prompt bound to a model.
///
/// # Examples
///
/// ```
/// use vellum_core::ReviewTask;
///
/// let task = ReviewTask::NotesOrganize { keywords: "Predicate, SE".to_string() };
/// assert!(task.instruction_prompt().ends_with("Predicate, SE"));
/// assert_eq!(task.model(), "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReviewTask {
    /// Comprehensive 510(k) summary analysis
    Summary,
    /// Review guideline with a checklist
    Guidance,
    /// Structured notes with highlighted keywords
    NotesOrganize {
        /// Comma separated keywords to highlight
        keywords: String,
    },
    /// Action items formatted as a checklist
    NotesActionItems,
    /// Glossary of technical terms found in the notes
    NotesGlossary,
    /// Professional rewrite for an FDA report
    NotesPolish,
}

impl ReviewTask {
    /// Short identifier used on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            ReviewTask::Summary => "summary",
            ReviewTask::Guidance => "guidance",
            ReviewTask::NotesOrganize { .. } => "notes-organize",
            ReviewTask::NotesActionItems => "notes-action-items",
            ReviewTask::NotesGlossary => "notes-glossary",
            ReviewTask::NotesPolish => "notes-polish",
        }
    }

    /// Instruction prompt sent as the system instruction.
    pub fn instruction_prompt(&self) -> String {
        match self {
            ReviewTask::Summary => "Create a comprehensive summary of this 510(k) document in markdown. \
                Highlight key regulatory terms (like 'Predicate', 'Indication', 'SE') by wrapping them \
                in spans with class 'text-coral' or simply ensure they stand out."
                .to_string(),
            ReviewTask::Guidance => {
                "Create a comprehensive review guideline with a checklist based on the provided text."
                    .to_string()
            }
            ReviewTask::NotesOrganize { keywords } => format!(
                "Organize these notes into structured markdown. Highlight these keywords in coral \
                 color using HTML span style: {}",
                keywords
            ),
            ReviewTask::NotesActionItems => {
                "Extract action items and format as a checklist.".to_string()
            }
            ReviewTask::NotesGlossary => {
                "Explain technical terms found in the notes in a glossary format.".to_string()
            }
            ReviewTask::NotesPolish => {
                "Rewrite these notes to be more professional and concise for an FDA report."
                    .to_string()
            }
        }
    }

    /// Model the action is bound to.
    pub fn model(&self) -> &'static str {
        match self {
            ReviewTask::Summary
            | ReviewTask::NotesOrganize { .. }
            | ReviewTask::NotesActionItems => "gemini-2.5-flash",
            ReviewTask::Guidance | ReviewTask::NotesGlossary => "gemini-3-flash-preview",
            ReviewTask::NotesPolish => "gemini-2.5-flash-lite",
        }
    }

    /// Request builder pre-filled for this action and the given content.
    pub fn request(&self, content: impl Into<String>) -> InvocationRequestBuilder {
        let mut builder = InvocationRequest::builder();
        builder
            .instruction_prompt(self.instruction_prompt())
            .user_content(content)
            .model_identifier(self.model())
            .temperature(DEFAULT_TEMPERATURE);
        builder
    }
}
