//! Orchestrates the studio pipeline: prompt, plan, validate, generate,
//! explain, version.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use ts_rs::TS;
use uuid::Uuid;

use super::{
    code_generator::generate_code,
    plan_explainer::explain,
    plan_validator::{PlanValidationError, validate},
    prompt_planner::plan_from_prompt,
    studio_session::{ChatMessage, StudioSession, UiModel},
    ui_plan::{Layout, Tone, UiPlan},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudioError {
    #[error("session not found")]
    SessionNotFound,
    #[error("version {0} not found")]
    VersionNotFound(usize),
}

/// Result of one prompt submission. On rejection `model` and `version`
/// are absent, `rejection` carries the reason, and nothing beyond the
/// transcript has changed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct PromptOutcome {
    pub message: ChatMessage,
    pub model: Option<UiModel>,
    pub version: Option<usize>,
    pub rejection: Option<String>,
}

/// One row in the versions list.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct VersionSummary {
    pub index: usize,
    pub title: String,
    pub layout: Option<Layout>,
    pub tone: Option<Tone>,
    pub component_count: usize,
}

/// In-memory registry of studio sessions keyed by id.
#[derive(Default)]
pub struct StudioService {
    sessions: DashMap<Uuid, StudioSession>,
}

impl StudioService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_session(&self) -> StudioSession {
        let session = StudioSession::new();
        self.sessions.insert(session.id, session.clone());
        info!(session_id = %session.id, "created studio session");
        session
    }

    pub fn snapshot(&self, session_id: Uuid) -> Result<StudioSession, StudioError> {
        self.sessions
            .get(&session_id)
            .map(|entry| entry.clone())
            .ok_or(StudioError::SessionNotFound)
    }

    /// Run the full pipeline for one user prompt.
    pub fn submit_prompt(
        &self,
        session_id: Uuid,
        text: &str,
    ) -> Result<PromptOutcome, StudioError> {
        let mut entry = self
            .sessions
            .get_mut(&session_id)
            .ok_or(StudioError::SessionNotFound)?;
        let session = entry.value_mut();

        session.push_message(ChatMessage::user(text));

        let candidate = plan_from_prompt(text, session.current.as_ref().map(|m| &m.plan));
        match apply_candidate(session, candidate) {
            Ok((model, version)) => {
                let message = ChatMessage::assistant(&model.explanation);
                session.push_message(message.clone());
                info!(
                    session_id = %session_id,
                    version,
                    components = model.plan.components.len(),
                    "installed new ui model version"
                );
                Ok(PromptOutcome {
                    message,
                    model: Some(model),
                    version: Some(version),
                    rejection: None,
                })
            }
            Err(reason) => {
                let message =
                    ChatMessage::assistant(&format!("I can't apply that change: {reason}"));
                session.push_message(message.clone());
                warn!(session_id = %session_id, %reason, "rejected candidate plan");
                Ok(PromptOutcome {
                    message,
                    model: None,
                    version: None,
                    rejection: Some(reason.to_string()),
                })
            }
        }
    }

    pub fn list_versions(&self, session_id: Uuid) -> Result<Vec<VersionSummary>, StudioError> {
        let entry = self
            .sessions
            .get(&session_id)
            .ok_or(StudioError::SessionNotFound)?;
        Ok(entry
            .versions
            .iter()
            .enumerate()
            .map(|(index, model)| VersionSummary {
                index,
                title: model.plan.content.title.clone(),
                layout: model.plan.layout,
                tone: model.plan.tone,
                component_count: model.plan.components.len(),
            })
            .collect())
    }

    /// Pure checkout: installs the stored model as current. Entries
    /// after `index` are left in place.
    pub fn restore_version(
        &self,
        session_id: Uuid,
        index: usize,
    ) -> Result<UiModel, StudioError> {
        let mut entry = self
            .sessions
            .get_mut(&session_id)
            .ok_or(StudioError::SessionNotFound)?;
        let session = entry.value_mut();

        let model = session
            .versions
            .get(index)
            .cloned()
            .ok_or(StudioError::VersionNotFound(index))?;
        session.current = Some(model.clone());
        session.push_message(ChatMessage::assistant(&format!(
            "Restored version {}.",
            index + 1
        )));
        info!(session_id = %session_id, version = index, "restored version");
        Ok(model)
    }
}

/// Validate and, on success, install a candidate: generate the code and
/// explanation, append the model to the history, set it current. On
/// failure nothing changes.
fn apply_candidate(
    session: &mut StudioSession,
    candidate: UiPlan,
) -> Result<(UiModel, usize), PlanValidationError> {
    validate(&candidate)?;
    let code = generate_code(&candidate);
    let explanation = explain(&candidate);
    let model = UiModel {
        plan: candidate,
        code,
        explanation,
    };
    let version = session.versions.append(model.clone());
    session.current = Some(model.clone());
    Ok((model, version))
}
