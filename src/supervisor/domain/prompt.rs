//! The supervisor's system instruction and chat-history mapping.

use crate::conversation::domain::{FINISH, MessageBody, MessageLog};
use crate::supervisor::ports::{ChatMessage, ChatRole, CompletionRequest};
use crate::worker::domain::WorkerProfile;
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

/// Default system instruction template.
///
/// The template receives `workers` (each with `name` and `description`),
/// `finish` (the termination token), and `choices` (every legal token,
/// back-quoted and joined for prose).
pub const DEFAULT_TEMPLATE: &str = "\
You are a supervisor in a multi-agent AI system. Your role is to oversee a team of \
specialised agents and route user requests.
Based on the conversation so far, you must select the next agent to act from the \
available list or decide that the task is complete.

Available agents:
{% for worker in workers %}- `{{ worker.name }}`: {{ worker.description }}
{% endfor %}- `{{ finish }}`: If the user's request has been fully answered and the task is complete.

Analyse the conversation and output *only* the name of the next agent to act.
Your response MUST BE exactly one word: {{ choices }}.";

/// Error returned when the instruction template cannot be rendered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render supervisor prompt: {0}")]
pub struct PromptRenderError(pub String);

#[derive(Serialize)]
struct WorkerEntry<'a> {
    name: &'a str,
    description: &'a str,
}

/// Template for the supervisor's system instruction.
///
/// # Examples
///
/// ```
/// use switchyard::supervisor::domain::SupervisorPrompt;
/// use switchyard::worker::domain::WorkerProfile;
///
/// let browser = WorkerProfile::new("Browser", "Searches the web.").expect("valid profile");
/// let instruction = SupervisorPrompt::default()
///     .render([&browser])
///     .expect("default template renders");
///
/// assert!(instruction.contains("- `Browser`: Searches the web."));
/// assert!(instruction.contains("exactly one word: `Browser` or `FINISH`."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorPrompt {
    template: String,
}

impl Default for SupervisorPrompt {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl SupervisorPrompt {
    /// Creates a prompt from a custom `minijinja` template.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Returns the template source.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Renders the instruction for the given workers.
    ///
    /// # Errors
    ///
    /// Returns [`PromptRenderError`] when the template is malformed or
    /// references undefined values in a failing way.
    pub fn render<'a>(
        &self,
        profiles: impl IntoIterator<Item = &'a WorkerProfile>,
    ) -> Result<String, PromptRenderError> {
        let workers: Vec<WorkerEntry<'_>> = profiles
            .into_iter()
            .map(|profile| WorkerEntry {
                name: profile.name().as_str(),
                description: profile.description(),
            })
            .collect();
        let choices = describe_choices(workers.iter().map(|entry| entry.name));

        Environment::new()
            .render_str(
                &self.template,
                minijinja::context! {
                    workers => workers,
                    finish => FINISH,
                    choices => choices,
                },
            )
            .map_err(|error| PromptRenderError(error.to_string()))
    }
}

/// Builds the completion request for a supervisor turn.
///
/// Human messages map to the user role; control and agent-result messages
/// map to the assistant role so the supervisor sees its own prior
/// decisions and the workers' answers in order.
#[must_use]
pub fn build_request(system_instruction: &str, log: &MessageLog) -> CompletionRequest {
    let messages = log
        .iter()
        .map(|message| {
            let role = match message.body() {
                MessageBody::Human { .. } => ChatRole::User,
                MessageBody::Control { .. } | MessageBody::AgentResult { .. } => {
                    ChatRole::Assistant
                }
            };
            ChatMessage::new(role, message.content())
        })
        .collect();

    CompletionRequest {
        system: system_instruction.to_owned(),
        messages,
    }
}

fn describe_choices<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = names
        .chain(std::iter::once(FINISH))
        .map(|name| format!("`{name}`"))
        .collect();
    match quoted.split_last() {
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
        None => String::new(),
    }
}
