//! Business and business-image operations

use shared::store::BusinessAction;
use shared::{
    Business, BusinessFilters, BusinessId, BusinessImage, BusinessInput, BusinessPage, ImageId,
    NewBusinessImage,
};

use super::Gateway;
use crate::error::{ApiOutcome, ClientResult, Deleted};

impl Gateway {
    /// `GET /api/businesses` without touching the store.
    ///
    /// Used by the debounced browse fetch, which decides on its own whether
    /// the page is still wanted when it arrives.
    pub async fn request_businesses(
        &self,
        filters: &BusinessFilters,
    ) -> ClientResult<ApiOutcome<BusinessPage>> {
        let request = self
            .client
            .get(self.url("/api/businesses"))
            .query(&filters.to_query());
        self.execute("fetch_all_businesses", request).await
    }

    /// `GET /api/businesses`, replacing the browse map
    pub async fn fetch_all_businesses(
        &self,
        filters: &BusinessFilters,
    ) -> ClientResult<ApiOutcome<BusinessPage>> {
        let outcome = self.request_businesses(filters).await?;
        if let ApiOutcome::Success(page) = &outcome {
            self.apply_page(page);
        }
        Ok(outcome)
    }

    /// Apply a fetched list page to the browse map
    pub fn apply_page(&self, page: &BusinessPage) {
        self.store.dispatch(load_all(page));
    }

    /// Apply a list page only if `still_wanted` holds under the store lock
    pub fn apply_page_if(&self, page: &BusinessPage, still_wanted: impl FnOnce() -> bool) -> bool {
        self.store.dispatch_if(load_all(page), still_wanted)
    }

    /// `GET /api/businesses/:id`, replacing the detail map
    pub async fn fetch_business_details(&self, id: BusinessId) -> ClientResult<ApiOutcome<Business>> {
        let request = self.client.get(self.url(&format!("/api/businesses/{}", id)));
        let outcome: ApiOutcome<Business> = self.execute("fetch_business_details", request).await?;
        if let ApiOutcome::Success(business) = &outcome {
            self.store.dispatch(BusinessAction::LoadDetail(business.clone()));
        }
        Ok(outcome)
    }

    /// `GET /api/businesses/current`, replacing the owned map
    pub async fn fetch_current_user_businesses(&self) -> ClientResult<ApiOutcome<Vec<Business>>> {
        let request = self.client.get(self.url("/api/businesses/current"));
        let outcome: ApiOutcome<BusinessPage> =
            self.execute("fetch_current_user_businesses", request).await?;
        if let ApiOutcome::Success(page) = &outcome {
            self.store
                .dispatch(BusinessAction::LoadUserOwned(page.businesses.clone()));
        }
        Ok(outcome.map(|page| page.businesses))
    }

    /// `POST /api/businesses`; adds to browse and owned
    pub async fn create_business(&self, input: &BusinessInput) -> ClientResult<ApiOutcome<Business>> {
        let request = self.client.post(self.url("/api/businesses")).json(input);
        let outcome: ApiOutcome<Business> = self.execute("create_business", request).await?;
        if let ApiOutcome::Success(business) = &outcome {
            self.store.dispatch(BusinessAction::Add(business.clone()));
        }
        Ok(outcome)
    }

    /// `PUT /api/businesses/:id`; overwrites in every map
    pub async fn edit_business(
        &self,
        id: BusinessId,
        input: &BusinessInput,
    ) -> ClientResult<ApiOutcome<Business>> {
        let request = self
            .client
            .put(self.url(&format!("/api/businesses/{}", id)))
            .json(input);
        let outcome: ApiOutcome<Business> = self.execute("edit_business", request).await?;
        if let ApiOutcome::Success(business) = &outcome {
            self.store.dispatch(BusinessAction::Update(business.clone()));
        }
        Ok(outcome)
    }

    /// `DELETE /api/businesses/:id`; removes from every map
    pub async fn remove_business(&self, id: BusinessId) -> ClientResult<ApiOutcome<Deleted>> {
        let request = self
            .client
            .delete(self.url(&format!("/api/businesses/{}", id)));
        let outcome = self.execute_empty("remove_business", request).await?;
        if outcome.is_success() {
            self.store.dispatch(BusinessAction::Remove(id));
        }
        Ok(outcome.map(|_| Deleted))
    }

    /// `POST /api/businesses/:id/images`.
    ///
    /// Images are nested in the business payload, so the store is not
    /// patched; callers refresh the detail instead.
    pub async fn add_business_image(
        &self,
        business_id: BusinessId,
        image: &NewBusinessImage,
    ) -> ClientResult<ApiOutcome<BusinessImage>> {
        let request = self
            .client
            .post(self.url(&format!("/api/businesses/{}/images", business_id)))
            .json(image);
        self.execute("add_business_image", request).await
    }

    /// `DELETE /api/business-images/:id`; store untouched, as above
    pub async fn delete_business_image(&self, image_id: ImageId) -> ClientResult<ApiOutcome<Deleted>> {
        let request = self
            .client
            .delete(self.url(&format!("/api/business-images/{}", image_id)));
        let outcome = self.execute_empty("delete_business_image", request).await?;
        Ok(outcome.map(|_| Deleted))
    }
}

fn load_all(page: &BusinessPage) -> BusinessAction {
    BusinessAction::LoadAll {
        businesses: page.businesses.clone(),
        pagination: page.pagination(),
    }
}
