//! The state of the link creation form and its transitions.
//!
//! Nothing in here talks to the network or renders anything: the ui snapshots a
//! request with [`LinkForm::begin_submit`], performs the remote call and feeds the
//! outcome back through [`LinkForm::settle`], then displays the returned
//! [`Notification`].
use std::fmt::Display;

use crate::{
    apirequests::links::{CreateLinkRequest, CreateLinkResponse},
    config::SiteConfig,
    datatypes::Notification,
};

/// Used in the copied link when neither a recent nor a typed slug exists.
pub const SLUG_PLACEHOLDER: &str = "[slug]";
/// Used in the inline preview while the slug input is empty.
pub const PREVIEW_PLACEHOLDER: &str = " [Slug] ";

/// The suggested slug length, rendered as input hints only.
pub const SLUG_MIN_LENGTH: usize = 6;
pub const SLUG_MAX_LENGTH: usize = 12;

/// The two input fields.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub slug: String,
    pub url: String,
}

impl FormState {
    fn to_request(&self) -> CreateLinkRequest {
        CreateLinkRequest {
            target: self.url.clone(),
            slug: self.slug.clone(),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Everything the link creation form owns.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct LinkForm {
    fields: FormState,
    recent_slug: String,
    in_flight: usize,
}

impl LinkForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn fields(&self) -> &FormState {
        &self.fields
    }

    /// The slug of the last successfully created link, empty until then.
    #[must_use]
    pub fn recent_slug(&self) -> &str {
        &self.recent_slug
    }

    #[must_use]
    pub const fn phase(&self) -> SubmitPhase {
        if self.in_flight == 0 {
            SubmitPhase::Idle
        } else {
            SubmitPhase::Submitting
        }
    }

    pub fn update_slug(&mut self, slug: impl Into<String>) {
        self.fields.slug = slug.into();
    }

    pub fn update_url(&mut self, url: impl Into<String>) {
        self.fields.url = url.into();
    }

    /// Snapshot the current fields into a request and enter [`SubmitPhase::Submitting`].
    ///
    /// Nothing is validated here, and a submission may start while another one
    /// is still in flight.
    pub fn begin_submit(&mut self) -> CreateLinkRequest {
        self.in_flight += 1;
        self.fields.to_request()
    }

    /// Apply the outcome of the remote call started with `submitted`.
    ///
    /// Only a response with `data == true` is a success: it records the submitted
    /// slug as the recent one and clears the fields. Every other outcome leaves
    /// the fields untouched so the user can correct them, and yields the generic
    /// error regardless of what the server reported.
    pub fn settle<E: Display>(
        &mut self,
        submitted: CreateLinkRequest,
        outcome: Result<CreateLinkResponse, E>,
    ) -> Notification {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Ok(CreateLinkResponse {
                data: true,
                message,
            }) => {
                self.recent_slug = submitted.slug;
                self.fields = FormState::default();
                Notification::success(message)
            }
            Ok(_) | Err(_) => Notification::invalid_input(),
        }
    }

    /// The slug the copy action uses: recent, else typed, else a placeholder.
    #[must_use]
    pub fn effective_slug(&self) -> &str {
        if !self.recent_slug.is_empty() {
            &self.recent_slug
        } else if !self.fields.slug.is_empty() {
            &self.fields.slug
        } else {
            SLUG_PLACEHOLDER
        }
    }

    /// The link written to the clipboard.
    #[must_use]
    pub fn share_link(&self, site: &SiteConfig) -> String {
        site.short_link(self.effective_slug())
    }

    /// The copy action: the link for the clipboard and the single confirmation to show.
    ///
    /// The confirmation does not depend on whether the clipboard write succeeds.
    #[must_use]
    pub fn copy(&self, site: &SiteConfig) -> (String, Notification) {
        (self.share_link(site), Notification::copied())
    }

    /// The link shown under the form while typing.
    #[must_use]
    pub fn preview_link(&self, site: &SiteConfig) -> String {
        if self.fields.slug.is_empty() {
            site.short_link(PREVIEW_PLACEHOLDER)
        } else {
            site.short_link(&self.fields.slug)
        }
    }
}
