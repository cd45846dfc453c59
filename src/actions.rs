use log::{error, info};

use crate::client::LoanTrackerClient;
use crate::cookies::{get_cookie, CSRF_COOKIE_NAME};
use crate::messages::{Message, MessageSink, GENERIC_ERROR_MESSAGE};

pub const DEFAULT_CONFIRM_PROMPT: &str = "Are you sure you want to perform this action?";
pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this item?";
pub const MARK_PAID_CONFIRM_PROMPT: &str = "Mark this installment as paid?";

/// yes/no prompt shown before a destructive or outward action
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// ask with the given prompt, or the generic one
pub fn confirm_action<C: Confirm>(confirm: &mut C, message: Option<&str>) -> bool {
    confirm.confirm(message.unwrap_or(DEFAULT_CONFIRM_PROMPT))
}

/// gate for delete links
pub fn confirm_delete<C: Confirm>(confirm: &mut C) -> bool {
    confirm.confirm(DELETE_CONFIRM_PROMPT)
}

/// what happened to a mark-paid request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkPaidOutcome {
    /// the user declined the prompt; nothing was sent
    Cancelled,
    /// the server recorded the payment and the page was reloaded
    Paid { loan_closed: bool },
    /// the server answered but refused
    Rejected { error: String },
    /// transport, status or decoding failure
    Failed,
}

/// dashboard actions on installments
///
/// The prompt, the banner sink and the page reload are all injected.
pub struct InstallmentActions<'a, C, S, R> {
    client: &'a LoanTrackerClient,
    confirm: C,
    messages: S,
    reload: R,
    csrf_token: Option<String>,
}

impl<'a, C, S, R> InstallmentActions<'a, C, S, R>
where
    C: Confirm,
    S: MessageSink,
    R: FnMut(),
{
    pub fn new(client: &'a LoanTrackerClient, confirm: C, messages: S, reload: R) -> Self {
        Self {
            client,
            confirm,
            messages,
            reload,
            csrf_token: None,
        }
    }

    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// take the token from a `Cookie` header, using the `csrftoken` cookie
    pub fn with_cookie_header(self, cookie_header: &str) -> Self {
        self.with_cookie_header_named(cookie_header, CSRF_COOKIE_NAME)
    }

    pub fn with_cookie_header_named(mut self, cookie_header: &str, cookie_name: &str) -> Self {
        self.csrf_token = get_cookie(cookie_header, cookie_name);
        self
    }

    pub fn messages(&self) -> &S {
        &self.messages
    }

    pub fn into_messages(self) -> S {
        self.messages
    }

    /// confirm, post, report, and reload on success
    ///
    /// Never retries. Failures leave the page as it was, with a banner.
    pub async fn mark_paid(&mut self, installment_id: u64) -> MarkPaidOutcome {
        if !confirm_action(&mut self.confirm, Some(MARK_PAID_CONFIRM_PROMPT)) {
            return MarkPaidOutcome::Cancelled;
        }

        let result = self
            .client
            .mark_installment_paid(installment_id, self.csrf_token.as_deref())
            .await;

        match result {
            Ok(body) if body.success => {
                self.messages
                    .show(Message::success(body.message.unwrap_or_default()));
                info!("installment {installment_id} marked paid");
                (self.reload)();
                MarkPaidOutcome::Paid {
                    loan_closed: body.loan_closed.unwrap_or(false),
                }
            }
            Ok(body) => {
                let error = body.error.unwrap_or_default();
                self.messages.show(Message::error(error.clone()));
                MarkPaidOutcome::Rejected { error }
            }
            Err(err) => {
                error!("marking installment {installment_id} paid failed: {err}");
                self.messages.show(Message::error(GENERIC_ERROR_MESSAGE));
                MarkPaidOutcome::Failed
            }
        }
    }
}
