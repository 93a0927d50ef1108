//! Form controllers
//!
//! Each controller owns its field data and submission state. A submit
//! validates locally first (no request on failure), refuses to run while a
//! previous submit is in flight, and on failure keeps the form open with the
//! errors next to the fields or in the `general` banner.

use std::future::Future;

use shared::forms::FormState;
use shared::{
    validate_business, validate_image, validate_login, validate_review, validate_signup,
    ApiErrors, Business, BusinessId, BusinessImage, BusinessInput, LoginInput, NewBusinessImage,
    Review, ReviewId, ReviewInput, SessionUser, SignupInput,
};

use crate::error::{ApiOutcome, ClientResult};
use crate::gateway::Gateway;

const BUSINESS_UNEXPECTED: &str = "An unexpected error occurred";
const TRY_AGAIN: &str = "Something went wrong. Please try again.";

/// Shared submit flow: validate, mark submitting, send, settle the state
async fn submit_with<D, T, F, Fut>(
    state: &mut FormState<D>,
    validate: fn(&D) -> Result<(), ApiErrors>,
    unexpected: &str,
    rejected_fallback: &str,
    send: F,
) -> Option<T>
where
    D: Clone,
    F: FnOnce(D) -> Fut,
    Fut: Future<Output = ClientResult<ApiOutcome<T>>>,
{
    if !state.can_submit() {
        return None;
    }
    if let Err(errors) = validate(&state.data) {
        state.reject(errors);
        return None;
    }
    if !state.begin_submit() {
        return None;
    }

    match send(state.data.clone()).await {
        Ok(ApiOutcome::Success(value)) => {
            state.succeed();
            Some(value)
        }
        Ok(ApiOutcome::Rejected(errors)) => {
            state.fail(errors.or_general(rejected_fallback));
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "form submission failed");
            state.fail(ApiErrors::general(unexpected));
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessFormMode {
    Create,
    Edit(BusinessId),
}

/// Create or edit a business listing
pub struct BusinessForm {
    gateway: Gateway,
    mode: BusinessFormMode,
    pub state: FormState<BusinessInput>,
}

impl BusinessForm {
    pub fn create(gateway: Gateway) -> Self {
        Self {
            gateway,
            mode: BusinessFormMode::Create,
            state: FormState::default(),
        }
    }

    /// Pre-filled from the business being edited
    pub fn edit(gateway: Gateway, business: &Business) -> Self {
        Self {
            gateway,
            mode: BusinessFormMode::Edit(business.id),
            state: FormState::new(BusinessInput::from(business)),
        }
    }

    pub fn mode(&self) -> BusinessFormMode {
        self.mode
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.mode, self.state.is_submitting()) {
            (BusinessFormMode::Create, false) => "Create Business",
            (BusinessFormMode::Create, true) => "Creating...",
            (BusinessFormMode::Edit(_), false) => "Update Business",
            (BusinessFormMode::Edit(_), true) => "Updating...",
        }
    }

    /// Returns the saved business; `None` leaves errors on the form
    pub async fn submit(&mut self) -> Option<Business> {
        let gateway = &self.gateway;
        match self.mode {
            BusinessFormMode::Create => {
                submit_with(
                    &mut self.state,
                    validate_business,
                    BUSINESS_UNEXPECTED,
                    "Failed to create business",
                    |input| async move { gateway.create_business(&input).await },
                )
                .await
            }
            BusinessFormMode::Edit(id) => {
                submit_with(
                    &mut self.state,
                    validate_business,
                    BUSINESS_UNEXPECTED,
                    "Failed to update business",
                    |input| async move { gateway.edit_business(id, &input).await },
                )
                .await
            }
        }
    }
}

/// Write or edit a review
pub struct ReviewForm {
    gateway: Gateway,
    business_id: BusinessId,
    editing: Option<ReviewId>,
    pub state: FormState<ReviewInput>,
}

impl ReviewForm {
    pub fn write(gateway: Gateway, business_id: BusinessId) -> Self {
        Self {
            gateway,
            business_id,
            editing: None,
            state: FormState::default(),
        }
    }

    pub fn edit(gateway: Gateway, review: &Review) -> Self {
        Self {
            gateway,
            business_id: review.business_id,
            editing: Some(review.id),
            state: FormState::new(ReviewInput::from(review)),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Review"
        } else {
            "Write a Review"
        }
    }

    pub fn set_stars(&mut self, stars: u8) {
        self.state.edit("stars", |input| input.stars = stars);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.state.edit("review", |input| input.review = text);
    }

    pub async fn submit(&mut self) -> Option<Review> {
        let gateway = &self.gateway;
        match self.editing {
            Some(review_id) => {
                submit_with(
                    &mut self.state,
                    validate_review,
                    TRY_AGAIN,
                    TRY_AGAIN,
                    |input| async move { gateway.edit_review(review_id, &input).await },
                )
                .await
            }
            None => {
                let business_id = self.business_id;
                submit_with(
                    &mut self.state,
                    validate_review,
                    TRY_AGAIN,
                    TRY_AGAIN,
                    |input| async move { gateway.create_review(business_id, &input).await },
                )
                .await
            }
        }
    }
}

/// Add a photo to a business
pub struct ImageForm {
    gateway: Gateway,
    business_id: BusinessId,
    pub state: FormState<NewBusinessImage>,
}

impl ImageForm {
    pub fn new(gateway: Gateway, business_id: BusinessId) -> Self {
        Self {
            gateway,
            business_id,
            state: FormState::default(),
        }
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.state.edit("url", |input| input.url = url);
    }

    /// On success the form closes and the business detail is reloaded
    pub async fn submit(&mut self) -> Option<BusinessImage> {
        let gateway = &self.gateway;
        let business_id = self.business_id;
        let image = submit_with(
            &mut self.state,
            validate_image,
            TRY_AGAIN,
            "Failed to add image",
            |input| async move { gateway.add_business_image(business_id, &input).await },
        )
        .await?;

        self.state.data = NewBusinessImage::default();
        refresh_detail(&self.gateway, business_id).await;
        Some(image)
    }

    /// Cancel closes the form and drops what was typed
    pub fn cancel(&mut self) {
        self.state = FormState::default();
        self.state.open = false;
    }
}

/// Log in with username or email
pub struct LoginForm {
    gateway: Gateway,
    pub state: FormState<LoginInput>,
}

impl LoginForm {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            state: FormState::default(),
        }
    }

    pub async fn submit(&mut self) -> Option<SessionUser> {
        let gateway = &self.gateway;
        submit_with(
            &mut self.state,
            validate_login,
            TRY_AGAIN,
            "The provided credentials were invalid.",
            |input| async move { gateway.login(&input).await },
        )
        .await
    }
}

pub struct SignupForm {
    gateway: Gateway,
    pub state: FormState<SignupInput>,
}

impl SignupForm {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            state: FormState::default(),
        }
    }

    pub async fn submit(&mut self) -> Option<SessionUser> {
        let gateway = &self.gateway;
        submit_with(
            &mut self.state,
            validate_signup,
            TRY_AGAIN,
            TRY_AGAIN,
            |input| async move { gateway.signup(&input).await },
        )
        .await
    }
}

/// Reload a business wholesale after one of its nested collections changed
pub(crate) async fn refresh_detail(gateway: &Gateway, business_id: BusinessId) {
    match gateway.fetch_business_details(business_id).await {
        Ok(ApiOutcome::Success(_)) => {}
        Ok(ApiOutcome::Rejected(errors)) => {
            tracing::warn!(business_id, errors = %errors, "detail refresh rejected")
        }
        Err(e) => tracing::error!(business_id, error = %e, "detail refresh failed"),
    }
}
