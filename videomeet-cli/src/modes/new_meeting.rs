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

use std::sync::Arc;

use anyhow::{anyhow, bail};
use chrono::{DateTime, Utc};
use tracing::info;
use videomeet_client::form::{welcome_message, SUBMIT_FAILED_ALERT};
use videomeet_client::{ClientProvider, CreateMeetingForm, PlatformConnector, SubmitOutcome};

use crate::cli_args::{Backend, NewMeeting};

/// Connect as the current identity, fill in the form from the arguments,
/// and create the meeting.
pub async fn new_meeting(backend: &Backend, args: NewMeeting) -> anyhow::Result<()> {
    let mut form = fill_form(&args, Utc::now())?;

    let api = backend.api_client();
    let auth = api.auth_state().await?;

    let mut provider = ClientProvider::new(
        PlatformConnector::new(args.platform_url.as_str()),
        args.api_key.clone(),
        Arc::new(api),
    );
    provider.sync(&auth).await?;

    let outcome = match (provider.client(), provider.identity()) {
        (Some(client), Some(identity)) => {
            println!("{}", welcome_message(identity));
            form.submit(Some(client), Some(identity)).await
        }
        _ => SubmitOutcome::NotReady,
    };
    provider.shutdown().await;

    match outcome {
        SubmitOutcome::Created { link } => {
            println!("{link}");
            Ok(())
        }
        SubmitOutcome::Failed => Err(anyhow!(form.alert().unwrap_or(SUBMIT_FAILED_ALERT))),
        SubmitOutcome::NotReady => bail!("Video client is not ready"),
    }
}

/// Apply the command-line inputs to a fresh form. Runs before any
/// connection is made so bad arguments fail fast.
pub fn fill_form(args: &NewMeeting, now: DateTime<Utc>) -> anyhow::Result<CreateMeetingForm> {
    let mut form = CreateMeetingForm::new(args.base_url.as_str());
    if let Some(description) = &args.description {
        form.set_description_enabled(true);
        form.set_description(description)?;
    }
    if let Some(start_at) = args.start_at {
        form.schedule_start(now);
        form.set_start_time(start_at, now)?;
    }
    if let Some(participants) = &args.participants {
        form.set_private();
        form.set_participants(participants)?;
        let emails = form.participant_emails()?;
        info!("Private meeting for {} participant(s)", emails.len());
    }
    Ok(form)
}
