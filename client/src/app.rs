//! Application root
//!
//! Owns the single store instance and the gateway bound to it, and hands
//! both to pages and forms.

use shared::store::RootState;
use shared::{Business, BusinessId};

use crate::config::Config;
use crate::error::{ApiOutcome, ClientResult};
use crate::forms::{BusinessForm, ImageForm, LoginForm, ReviewForm, SignupForm};
use crate::gateway::Gateway;
use crate::pages::{BrowsePage, DetailPage, ManagePage};
use crate::store::Store;

pub struct App {
    config: Config,
    store: Store,
    gateway: Gateway,
}

impl App {
    pub fn new(config: Config) -> ClientResult<Self> {
        let store = Store::new();
        let gateway = Gateway::new(config.api.base_url.clone(), store.clone())?;
        Ok(Self {
            config,
            store,
            gateway,
        })
    }

    /// Build around an existing gateway (for testing)
    pub fn with_gateway(config: Config, gateway: Gateway) -> Self {
        Self {
            config,
            store: gateway.store().clone(),
            gateway,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn state(&self) -> std::sync::Arc<RootState> {
        self.store.state()
    }

    /// Pick up an existing server session; being logged out is not an error
    pub async fn restore_session(&self) -> ClientResult<bool> {
        match self.gateway.restore_user().await? {
            ApiOutcome::Success(user) => {
                tracing::info!(user_id = user.id, "session restored");
                Ok(true)
            }
            ApiOutcome::Rejected(_) => {
                tracing::debug!("no active session");
                Ok(false)
            }
        }
    }

    pub fn browse_page(&self) -> BrowsePage {
        BrowsePage::new(self.gateway.clone(), &self.config.browse)
    }

    pub fn detail_page(&self, business_id: BusinessId) -> DetailPage {
        DetailPage::new(self.gateway.clone(), business_id)
    }

    pub fn manage_page(&self) -> ManagePage {
        ManagePage::new(self.gateway.clone())
    }

    pub fn login_form(&self) -> LoginForm {
        LoginForm::new(self.gateway.clone())
    }

    pub fn signup_form(&self) -> SignupForm {
        SignupForm::new(self.gateway.clone())
    }

    pub fn new_business_form(&self) -> BusinessForm {
        BusinessForm::create(self.gateway.clone())
    }

    pub fn edit_business_form(&self, business: &Business) -> BusinessForm {
        BusinessForm::edit(self.gateway.clone(), business)
    }

    pub fn review_form(&self, business_id: BusinessId) -> ReviewForm {
        ReviewForm::write(self.gateway.clone(), business_id)
    }

    pub fn image_form(&self, business_id: BusinessId) -> ImageForm {
        ImageForm::new(self.gateway.clone(), business_id)
    }
}
