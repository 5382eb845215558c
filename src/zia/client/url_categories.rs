use super::ZiaClient;
use crate::error::Error;
use crate::models::UrlCategory;

impl ZiaClient {
    /// Lists URL categories. `custom_only` restricts the result to
    /// custom-defined categories.
    pub fn list_url_categories(&self, custom_only: bool) -> Result<Vec<UrlCategory>, Error> {
        let url = self.build_url(&["urlCategories"])?;
        let mut req = self.http.get(url);
        if custom_only {
            req = req.query(&[("customOnly", "true")]);
        }
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one URL category.
    pub fn get_url_category(&self, category_id: &str) -> Result<UrlCategory, Error> {
        let url = self.build_url(&["urlCategories", category_id])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Creates a custom URL category. The API requires a super category
    /// for custom categories, so the check happens before the call.
    pub fn add_url_category(&self, category: &UrlCategory) -> Result<UrlCategory, Error> {
        if category.custom_category && category.super_category.is_none() {
            return Err(Error::Validation(
                "super_category is required when creating a custom URL category".to_string(),
            ));
        }
        let url = self.build_url(&["urlCategories"])?;
        let resp = self.http.post(url).json(category).send()?;
        self.expect_ok_json(resp)
    }

    /// Updates a URL category.
    pub fn update_url_category(
        &self,
        category_id: &str,
        category: &UrlCategory,
    ) -> Result<UrlCategory, Error> {
        let url = self.build_url(&["urlCategories", category_id])?;
        let resp = self.http.put(url).json(category).send()?;
        self.expect_ok_json(resp)
    }

    /// Deletes a custom URL category.
    pub fn delete_url_category(&self, category_id: &str) -> Result<(), Error> {
        let url = self.build_url(&["urlCategories", category_id])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }
}
