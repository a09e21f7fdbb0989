mod form;
mod loading;
mod view;

pub use form::{Field, SignupForm, SubmitError, UnitChoice, UnitSelection, WHATSAPP_MAX_LEN};
pub use loading::{LoadingPresenter, LOADING_MESSAGES, LOADING_TICK};

use std::{sync::Arc, time::Duration};

use iced::{task, widget::text_input, Subscription, Task};
use signup_ui::widget::Element;

use crate::{
    gui::Route,
    notification::{Notification, Variant},
    services::signup::{SignupApi, SignupError, SignupRequest},
};

/// Delay between a successful signup and the redirection to the sign in page.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

pub const SUCCESS_TITLE: &str = "Success!";
pub const SUCCESS_DESCRIPTION: &str =
    "Your 15-day free trial has been activated! Check your email for details.";
pub const FAILURE_TITLE: &str = "Signup Failed";
pub const SELECTION_REQUIRED_TITLE: &str = "Selection Required";
pub const SELECTION_REQUIRED_DESCRIPTION: &str = "Please select at least one unit type.";

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    View(ViewMessage),
    /// Response of the given submission attempt.
    Submitted(u64, Result<(), SignupError>),
    LoadingTick,
    /// Handled by the caller, which owns the toasts.
    Notify(Notification),
    /// Handled by the caller, which owns the routes.
    Navigate(Route),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewMessage {
    FieldEdited(Field, String),
    UnitSelected(UnitChoice),
    Submit,
    SignIn,
}

/// Terminal state of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

impl Outcome {
    pub fn notification(&self) -> Notification {
        match self {
            Self::Success => {
                Notification::new(Variant::Default, SUCCESS_TITLE, SUCCESS_DESCRIPTION)
            }
            Self::Failure(description) => {
                Notification::new(Variant::Destructive, FAILURE_TITLE, description.as_str())
            }
        }
    }
}

impl From<Result<(), SignupError>> for Outcome {
    fn from(res: Result<(), SignupError>) -> Self {
        match res {
            Ok(()) => Self::Success,
            Err(e) => Self::Failure(e.description()),
        }
    }
}

pub fn selection_required() -> Notification {
    Notification::new(
        Variant::Destructive,
        SELECTION_REQUIRED_TITLE,
        SELECTION_REQUIRED_DESCRIPTION,
    )
}

/// Resolves with `route` once `delay` has elapsed.
pub async fn redirect_after(delay: Duration, route: Route) -> Route {
    tokio::time::sleep(delay).await;
    route
}

/// The signup screen: form state, submission and loading feedback.
pub struct SignupPanel {
    api: Arc<dyn SignupApi>,
    company_name: String,
    form: SignupForm,
    loading: LoadingPresenter,
    /// Number of the latest submission attempt.
    attempt: u64,
    request: Option<task::Handle>,
    redirect: Option<task::Handle>,
}

impl SignupPanel {
    pub fn new(api: Arc<dyn SignupApi>, company_name: String) -> (Self, Task<Message>) {
        (
            Self {
                api,
                company_name,
                form: SignupForm::default(),
                loading: LoadingPresenter::default(),
                attempt: 0,
                request: None,
                redirect: None,
            },
            text_input::focus(Field::BranchName.input_id()),
        )
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn loading_message(&self) -> Option<&'static str> {
        self.loading.message()
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.form = std::mem::take(&mut self.form).with_field(field, value);
    }

    pub fn select_unit(&mut self, choice: UnitChoice) {
        self.form = std::mem::take(&mut self.form).select_unit(choice);
    }

    /// Validates the form and, on success, enters the loading state for a new attempt.
    /// Returns the attempt number with the request to send.
    pub fn submit(&mut self) -> Result<(u64, SignupRequest), SubmitError> {
        if self.loading.is_loading() {
            return Err(SubmitError::InFlight);
        }
        let request = self.form.validate()?;
        self.attempt += 1;
        self.loading.start();
        Ok((self.attempt, request))
    }

    /// Leaves the loading state. Returns `None` if the response belongs to a stale attempt.
    pub fn on_response(&mut self, attempt: u64, res: Result<(), SignupError>) -> Option<Outcome> {
        if attempt != self.attempt || !self.loading.is_loading() {
            tracing::debug!("Ignoring response of stale signup attempt {}", attempt);
            return None;
        }
        self.loading.stop();
        self.request = None;
        if let Err(e) = &res {
            tracing::error!("Signup attempt {} failed: {}", attempt, e);
        } else {
            tracing::info!("Signup attempt {} succeeded", attempt);
        }
        Some(res.into())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::FieldEdited(field, value)) => {
                self.edit(field, value);
            }
            Message::View(ViewMessage::UnitSelected(choice)) => {
                self.select_unit(choice);
            }
            Message::View(ViewMessage::SignIn) => {
                return Task::done(Message::Navigate(Route::SignIn));
            }
            Message::View(ViewMessage::Submit) => match self.submit() {
                Ok((attempt, request)) => {
                    let api = self.api.clone();
                    let (task, handle) = Task::perform(
                        async move { api.create_signup(&request).await },
                        move |res| Message::Submitted(attempt, res),
                    )
                    .abortable();
                    self.request = Some(handle);
                    return task;
                }
                Err(SubmitError::NoUnitSelected) => {
                    return Task::done(Message::Notify(selection_required()));
                }
                Err(SubmitError::MissingFields(fields)) => {
                    tracing::debug!("Signup form has invalid fields: {:?}", fields);
                }
                Err(SubmitError::InFlight) => {}
            },
            Message::Submitted(attempt, res) => {
                if let Some(outcome) = self.on_response(attempt, res) {
                    let notify = Task::done(Message::Notify(outcome.notification()));
                    if outcome == Outcome::Success {
                        let (redirect, handle) = Task::perform(
                            redirect_after(REDIRECT_DELAY, Route::SignIn),
                            Message::Navigate,
                        )
                        .abortable();
                        self.redirect = Some(handle);
                        return Task::batch(vec![notify, redirect]);
                    }
                    return notify;
                }
            }
            Message::LoadingTick => self.loading.tick(),
            Message::Notify(_) | Message::Navigate(_) => {}
        }
        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.loading.is_loading() {
            iced::time::every(LOADING_TICK).map(|_| Message::LoadingTick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<Message> {
        view::signup_view(&self.company_name, &self.form, self.loading.message())
            .map(Message::View)
    }
}

impl Drop for SignupPanel {
    fn drop(&mut self) {
        if let Some(handle) = self.request.take() {
            handle.abort();
        }
        if let Some(handle) = self.redirect.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signup::{YesNo, FALLBACK_ERROR_MESSAGE};
    use async_trait::async_trait;
    use iced::futures::StreamExt;
    use iced_runtime::{task::into_stream, Action};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    #[derive(Debug)]
    struct MockApi {
        calls: AtomicUsize,
        requests: Mutex<Vec<SignupRequest>>,
        response: Result<(), SignupError>,
    }

    impl MockApi {
        fn new(response: Result<(), SignupError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
                response,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SignupApi for MockApi {
        async fn create_signup(&self, request: &SignupRequest) -> Result<(), SignupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());
            self.response.clone()
        }
    }

    fn panel(api: Arc<MockApi>) -> SignupPanel {
        SignupPanel::new(api, "Acme".to_string()).0
    }

    fn fill(panel: &mut SignupPanel) {
        panel.edit(Field::BranchName, "Acme Traders".to_string());
        panel.edit(Field::ContactName, "Jane Doe".to_string());
        panel.edit(Field::Whatsapp, "9876543210".to_string());
        panel.edit(Field::Prefix, "ACME".to_string());
        panel.edit(Field::Email, "jane@acme.test".to_string());
    }

    /// Runs the task to completion and returns the messages it produced.
    async fn drain(task: Task<Message>) -> Vec<Message> {
        let mut messages = Vec::new();
        if let Some(mut stream) = into_stream(task) {
            while let Some(action) = stream.next().await {
                if let Action::Output(msg) = action {
                    messages.push(msg);
                }
            }
        }
        messages
    }

    /// Runs one submission through the api the way the update loop does.
    async fn submit_and_send(panel: &mut SignupPanel, api: &MockApi) -> Option<Outcome> {
        let (attempt, request) = panel.submit().unwrap();
        assert!(panel.is_loading());
        let res = api.create_signup(&request).await;
        panel.on_response(attempt, res)
    }

    #[tokio::test]
    async fn submit_without_unit_does_not_call_api() {
        let api = MockApi::new(Ok(()));
        let mut panel = panel(api.clone());
        fill(&mut panel);

        assert_eq!(panel.submit(), Err(SubmitError::NoUnitSelected));
        assert!(!panel.is_loading());

        let messages = drain(panel.update(Message::View(ViewMessage::Submit))).await;
        assert!(!panel.is_loading());
        assert_eq!(api.calls(), 0);
        assert_eq!(
            messages,
            vec![Message::Notify(Notification::new(
                Variant::Destructive,
                "Selection Required",
                "Please select at least one unit type.",
            ))]
        );
    }

    #[tokio::test]
    async fn missing_fields_emit_nothing() {
        let api = MockApi::new(Ok(()));
        let mut panel = panel(api.clone());
        panel.select_unit(UnitChoice::Box);

        let messages = drain(panel.update(Message::View(ViewMessage::Submit))).await;
        assert!(messages.is_empty());
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn successful_submit_notifies_then_redirects_after_delay() {
        let api = MockApi::new(Ok(()));
        let mut panel = panel(api.clone());
        fill(&mut panel);
        panel.select_unit(UnitChoice::Both);

        let messages = drain(panel.update(Message::View(ViewMessage::Submit))).await;
        assert_eq!(messages, vec![Message::Submitted(1, Ok(()))]);
        assert_eq!(api.calls(), 1);
        assert!(panel.is_loading());

        let start = tokio::time::Instant::now();
        let task = panel.update(Message::Submitted(1, Ok(())));
        assert!(!panel.is_loading());
        let messages = drain(task).await;
        let elapsed = start.elapsed();
        assert_eq!(
            messages,
            vec![
                Message::Notify(Notification::new(
                    Variant::Default,
                    "Success!",
                    "Your 15-day free trial has been activated! Check your email for details.",
                )),
                Message::Navigate(Route::SignIn),
            ]
        );
        assert!(elapsed >= REDIRECT_DELAY, "redirected after {:?}", elapsed);
        assert!(
            elapsed < REDIRECT_DELAY + Duration::from_millis(50),
            "redirected after {:?}",
            elapsed
        );
    }

    #[tokio::test]
    async fn failed_submit_notifies_without_redirect() {
        let api = MockApi::new(Err(SignupError::Http {
            status: 409,
            body: r#"{"message": "Email already exists"}"#.to_string(),
        }));
        let mut panel = panel(api.clone());
        fill(&mut panel);
        panel.select_unit(UnitChoice::Piece);

        let messages = drain(panel.update(Message::View(ViewMessage::Submit))).await;
        let [response] = messages.as_slice() else {
            panic!("unexpected messages: {:?}", messages);
        };
        let messages = drain(panel.update(response.clone())).await;
        assert!(!panel.is_loading());
        assert_eq!(
            messages,
            vec![Message::Notify(Notification::new(
                Variant::Destructive,
                "Signup Failed",
                "Email already exists",
            ))]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_the_screen_cancels_the_redirect() {
        let api = MockApi::new(Ok(()));
        let mut panel = panel(api);
        fill(&mut panel);
        panel.select_unit(UnitChoice::Box);
        let (attempt, _) = panel.submit().unwrap();

        let task = panel.update(Message::Submitted(attempt, Ok(())));
        drop(panel);
        let messages = drain(task).await;
        assert_eq!(messages, vec![Message::Notify(Outcome::Success.notification())]);
    }

    #[tokio::test]
    async fn sign_in_link_navigates_home() {
        let api = MockApi::new(Ok(()));
        let mut panel = panel(api);
        let messages = drain(panel.update(Message::View(ViewMessage::SignIn))).await;
        assert_eq!(messages, vec![Message::Navigate(Route::SignIn)]);
    }

    #[test]
    fn submit_with_missing_fields_keeps_idle() {
        let api = MockApi::new(Ok(()));
        let mut panel = panel(api.clone());
        panel.select_unit(UnitChoice::Both);

        assert!(matches!(panel.submit(), Err(SubmitError::MissingFields(_))));
        assert!(!panel.is_loading());
        assert!(!panel.form().branch_name.valid);
        assert_eq!(api.calls(), 0);
    }

    #[test]
    fn select_unit_is_idempotent() {
        let api = MockApi::new(Ok(()));
        let mut panel = panel(api);
        let cases = [
            (UnitChoice::Box, YesNo::Yes, YesNo::No),
            (UnitChoice::Piece, YesNo::No, YesNo::Yes),
            (UnitChoice::Both, YesNo::Yes, YesNo::Yes),
        ];
        for (choice, d, s) in cases {
            panel.select_unit(choice);
            let once = panel.form().unit;
            panel.select_unit(choice);
            assert_eq!(panel.form().unit, once);
            assert_eq!(once.d_unit(), d);
            assert_eq!(once.s_unit(), s);
            assert_eq!(once.choice(), Some(choice));
        }
    }

    #[tokio::test]
    async fn success_shows_notification() {
        let api = MockApi::new(Ok(()));
        let mut panel = panel(api.clone());
        fill(&mut panel);
        panel.select_unit(UnitChoice::Piece);

        let outcome = submit_and_send(&mut panel, &api).await;
        assert_eq!(outcome, Some(Outcome::Success));
        assert!(!panel.is_loading());
        assert_eq!(api.calls(), 1);

        let sent = api.requests.lock().unwrap()[0].clone();
        assert_eq!(sent.branch_d_unit, YesNo::No);
        assert_eq!(sent.branch_s_unit, YesNo::Yes);

        let notification = Outcome::Success.notification();
        assert_eq!(notification.variant, Variant::Default);
        assert_eq!(notification.title, "Success!");
        assert_eq!(
            notification.description,
            "Your 15-day free trial has been activated! Check your email for details."
        );
    }

    #[tokio::test]
    async fn failures_use_one_notification_contract() {
        let cases = [
            (SignupError::UnexpectedResponse(202), "Unexpected response."),
            (
                SignupError::Http {
                    status: 400,
                    body: r#"{"message": "Email already exists"}"#.to_string(),
                },
                "Email already exists",
            ),
            (
                SignupError::Http {
                    status: 500,
                    body: "<html>oops</html>".to_string(),
                },
                FALLBACK_ERROR_MESSAGE,
            ),
            (
                SignupError::Transport("connection refused".to_string()),
                FALLBACK_ERROR_MESSAGE,
            ),
        ];
        for (error, description) in cases {
            let api = MockApi::new(Err(error));
            let mut panel = panel(api.clone());
            fill(&mut panel);
            panel.select_unit(UnitChoice::Box);

            let outcome = submit_and_send(&mut panel, &api).await.unwrap();
            assert!(!panel.is_loading());
            let notification = outcome.notification();
            assert_eq!(notification.variant, Variant::Destructive);
            assert_eq!(notification.title, "Signup Failed");
            assert_eq!(notification.description, description);
        }
    }

    #[test]
    fn submit_is_noop_while_loading() {
        let api = MockApi::new(Ok(()));
        let mut panel = panel(api);
        fill(&mut panel);
        panel.select_unit(UnitChoice::Both);

        let (attempt, _) = panel.submit().unwrap();
        assert_eq!(panel.submit(), Err(SubmitError::InFlight));
        let _ = panel.update(Message::View(ViewMessage::Submit));
        assert!(panel.is_loading());

        assert_eq!(panel.on_response(attempt, Ok(())), Some(Outcome::Success));
    }

    #[test]
    fn stale_responses_are_ignored() {
        let api = MockApi::new(Ok(()));
        let mut panel = panel(api);
        fill(&mut panel);
        panel.select_unit(UnitChoice::Both);

        let (first, _) = panel.submit().unwrap();
        assert_eq!(
            panel.on_response(first, Err(SignupError::Transport("down".to_string()))),
            Some(Outcome::Failure(FALLBACK_ERROR_MESSAGE.to_string()))
        );

        let (second, _) = panel.submit().unwrap();
        assert_ne!(first, second);

        // A late duplicate of the first attempt does not end the second one.
        let _ = panel.update(Message::Submitted(first, Ok(())));
        assert!(panel.is_loading());
        assert_eq!(panel.on_response(first, Ok(())), None);

        assert_eq!(panel.on_response(second, Ok(())), Some(Outcome::Success));
        // Responses received once idle are ignored too.
        assert_eq!(panel.on_response(second, Ok(())), None);
    }

    #[test]
    fn loading_messages_follow_ticks() {
        let api = MockApi::new(Ok(()));
        let mut panel = panel(api);
        fill(&mut panel);
        panel.select_unit(UnitChoice::Box);

        // Ticks while idle change nothing.
        let _ = panel.update(Message::LoadingTick);
        assert_eq!(panel.loading_message(), None);

        let (attempt, _) = panel.submit().unwrap();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.extend(panel.loading_message());
            let _ = panel.update(Message::LoadingTick);
        }
        assert_eq!(
            seen,
            vec![
                LOADING_MESSAGES[0],
                LOADING_MESSAGES[1],
                LOADING_MESSAGES[2],
                LOADING_MESSAGES[3],
                LOADING_MESSAGES[0],
            ]
        );

        let _ = panel.update(Message::Submitted(attempt, Ok(())));
        assert!(!panel.is_loading());
        let _ = panel.update(Message::LoadingTick);
        assert_eq!(panel.loading_message(), None);
    }

    #[test]
    fn edits_keep_whatsapp_numeric() {
        let api = MockApi::new(Ok(()));
        let mut panel = panel(api);
        let _ = panel.update(Message::View(ViewMessage::FieldEdited(
            Field::Whatsapp,
            "98765".to_string(),
        )));
        let _ = panel.update(Message::View(ViewMessage::FieldEdited(
            Field::Whatsapp,
            "98765x".to_string(),
        )));
        assert_eq!(panel.form().branch_whatsapp.value, "98765");
    }

    #[tokio::test(start_paused = true)]
    async fn redirect_waits_two_seconds() {
        let early = tokio::time::timeout(
            Duration::from_millis(1999),
            redirect_after(REDIRECT_DELAY, Route::SignIn),
        )
        .await;
        assert!(early.is_err());

        let on_time = tokio::time::timeout(
            Duration::from_millis(2001),
            redirect_after(REDIRECT_DELAY, Route::SignIn),
        )
        .await;
        assert_eq!(on_time, Ok(Route::SignIn));
    }
}
