/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! The "create a new meeting" form.
//!
//! Three optional inputs, each behind its own toggle: a description, a
//! scheduled start time, and a participant restriction. Switching an input
//! off clears its value. Submitting creates a call on the platform under a
//! fresh UUID and keeps the resulting shareable link.

use chrono::{DateTime, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;
use videomeet_types::{CallData, CallInfo};

use crate::identity::Identity;
use crate::link::meeting_link;
use crate::platform::{VideoClient, DEFAULT_CALL_TYPE};

/// Maximum description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Alert shown when call creation fails.
pub const SUBMIT_FAILED_ALERT: &str = "Something went wrong. Please try again";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9._%+-]+@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .expect("EMAIL_REGEX pattern is valid")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("The {0} input is disabled")]
    InputDisabled(&'static str),

    #[error("Start time {0} is earlier than the current time")]
    StartTimeInPast(DateTime<Utc>),

    #[error("Invalid participant email: {0:?}")]
    InvalidEmail(String),
}

/// When the meeting starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartTime {
    #[default]
    Immediately,
    At(DateTime<Utc>),
}

/// Who may join.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Participants {
    #[default]
    AnyoneWithLink,
    /// Raw comma-separated email list as typed.
    Private(String),
}

/// A call created through the form.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedMeeting {
    pub call: CallInfo,
    pub link: String,
}

/// Result of [`CreateMeetingForm::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Client or user not ready; nothing happened.
    NotReady,
    Created { link: String },
    /// Creation failed; the alert is set and no call is kept.
    Failed,
}

/// What the form should render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState<'a> {
    /// Client or user not ready: show a loading affordance.
    Uninitialized,
    Editable {
        meeting: Option<&'a CreatedMeeting>,
    },
}

#[derive(Debug, Clone)]
pub struct CreateMeetingForm {
    base_url: String,
    description: Option<String>,
    start_time: StartTime,
    participants: Participants,
    meeting: Option<CreatedMeeting>,
    alert: Option<&'static str>,
}

impl CreateMeetingForm {
    /// `base_url` is where shareable links point, e.g. `https://meet.example.com`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            description: None,
            start_time: StartTime::Immediately,
            participants: Participants::AnyoneWithLink,
            meeting: None,
            alert: None,
        }
    }

    // -- description ---------------------------------------------------------

    /// Toggle the description input. Either direction clears the text.
    pub fn set_description_enabled(&mut self, enabled: bool) {
        self.description = enabled.then(String::new);
    }

    pub fn description_enabled(&self) -> bool {
        self.description.is_some()
    }

    /// Set the description, keeping at most [`DESCRIPTION_MAX_CHARS`] characters.
    pub fn set_description(&mut self, text: &str) -> Result<(), FormError> {
        let slot = self
            .description
            .as_mut()
            .ok_or(FormError::InputDisabled("description"))?;
        *slot = text.chars().take(DESCRIPTION_MAX_CHARS).collect();
        Ok(())
    }

    /// Current description text; empty when the input is off.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    // -- start time ----------------------------------------------------------

    pub fn start_immediately(&mut self) {
        self.start_time = StartTime::Immediately;
    }

    /// Switch to a scheduled start, seeded with `now` at minute precision.
    pub fn schedule_start(&mut self, now: DateTime<Utc>) {
        self.start_time = StartTime::At(to_minute(now));
    }

    /// Set the scheduled start, kept at minute precision. Values before the
    /// current minute are rejected and leave the previous value in place.
    pub fn set_start_time(
        &mut self,
        at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), FormError> {
        if self.start_time == StartTime::Immediately {
            return Err(FormError::InputDisabled("start time"));
        }
        let at = to_minute(at);
        if at < to_minute(now) {
            return Err(FormError::StartTimeInPast(at));
        }
        self.start_time = StartTime::At(at);
        Ok(())
    }

    pub fn start_time(&self) -> StartTime {
        self.start_time
    }

    // -- participants --------------------------------------------------------

    pub fn set_open_to_anyone(&mut self) {
        self.participants = Participants::AnyoneWithLink;
    }

    /// Restrict the meeting. Any emails already typed are kept.
    pub fn set_private(&mut self) {
        if self.participants == Participants::AnyoneWithLink {
            self.participants = Participants::Private(String::new());
        }
    }

    pub fn set_participants(&mut self, emails: &str) -> Result<(), FormError> {
        match &mut self.participants {
            Participants::Private(raw) => {
                *raw = emails.to_string();
                Ok(())
            }
            Participants::AnyoneWithLink => Err(FormError::InputDisabled("participants")),
        }
    }

    pub fn participants(&self) -> &Participants {
        &self.participants
    }

    /// Parsed participant emails: comma-separated, trimmed, blanks dropped.
    /// Empty for open meetings.
    pub fn participant_emails(&self) -> Result<Vec<String>, FormError> {
        let Participants::Private(raw) = &self.participants else {
            return Ok(Vec::new());
        };
        raw.split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(|e| {
                if EMAIL_REGEX.is_match(e) {
                    Ok(e.to_string())
                } else {
                    Err(FormError::InvalidEmail(e.to_string()))
                }
            })
            .collect()
    }

    // -- submission ----------------------------------------------------------

    pub fn state(&self, client_ready: bool, user_ready: bool) -> FormState<'_> {
        if client_ready && user_ready {
            FormState::Editable {
                meeting: self.meeting.as_ref(),
            }
        } else {
            FormState::Uninitialized
        }
    }

    pub fn meeting(&self) -> Option<&CreatedMeeting> {
        self.meeting.as_ref()
    }

    /// Alert left by the last failed submission.
    pub fn alert(&self) -> Option<&'static str> {
        self.alert
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// The call payload the current inputs produce.
    pub fn call_data(&self) -> CallData {
        let mut data = CallData::default();
        let description = self.description();
        if !description.is_empty() {
            data.custom.insert(
                CallData::DESCRIPTION_KEY.to_string(),
                Value::String(description.to_string()),
            );
        }
        if let StartTime::At(at) = self.start_time {
            data.starts_at = Some(at);
        }
        data
    }

    /// Create the call. A no-op when `client` or `user` is not ready.
    pub async fn submit<C: VideoClient + ?Sized>(
        &mut self,
        client: Option<&C>,
        user: Option<&Identity>,
    ) -> SubmitOutcome {
        let (Some(client), Some(_user)) = (client, user) else {
            return SubmitOutcome::NotReady;
        };

        self.alert = None;
        let id = Uuid::new_v4().to_string();

        match client
            .get_or_create_call(DEFAULT_CALL_TYPE, &id, self.call_data())
            .await
        {
            Ok(call) => {
                let link = meeting_link(&self.base_url, &call.id);
                log::info!("Created meeting {}", call.cid);
                self.meeting = Some(CreatedMeeting {
                    call,
                    link: link.clone(),
                });
                SubmitOutcome::Created { link }
            }
            Err(e) => {
                log::error!("Failed to create meeting {id}: {e}");
                self.meeting = None;
                self.alert = Some(SUBMIT_FAILED_ALERT);
                SubmitOutcome::Failed
            }
        }
    }
}

/// Greeting shown above the form.
pub fn welcome_message(user: &Identity) -> String {
    format!("Welcome {}", user.name())
}

fn to_minute(t: DateTime<Utc>) -> DateTime<Utc> {
    t.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(t)
}
