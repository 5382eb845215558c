use super::ZpaClient;
use crate::common;
use crate::error::Error;
use crate::models::{AppConnectorGroup, PagedResponse};
use crate::zpa::ZpaPageOptions;

impl ZpaClient {
    /// Lists app connector groups for the customer.
    pub fn list_app_connector_groups(
        &self,
        options: &ZpaPageOptions,
    ) -> Result<PagedResponse<AppConnectorGroup>, Error> {
        let url = self.build_url(&["appConnectorGroup"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one app connector group.
    pub fn get_app_connector_group(
        &self,
        group_id: &str,
        microtenant_id: Option<&str>,
    ) -> Result<AppConnectorGroup, Error> {
        let url = self.build_url(&["appConnectorGroup", group_id])?;
        let mut req = self.http.get(url);
        if let Some(microtenant_id) = microtenant_id {
            req = req.query(&[("microtenantId", microtenant_id)]);
        }
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Creates an app connector group.
    pub fn add_app_connector_group(
        &self,
        group: &AppConnectorGroup,
    ) -> Result<AppConnectorGroup, Error> {
        let url = self.build_url(&["appConnectorGroup"])?;
        let resp = self.http.post(url).json(group).send()?;
        self.expect_ok_json(resp)
    }

    /// Updates an app connector group.
    pub fn update_app_connector_group(
        &self,
        group_id: &str,
        group: &AppConnectorGroup,
    ) -> Result<(), Error> {
        let url = self.build_url(&["appConnectorGroup", group_id])?;
        let resp = self.http.put(url).json(group).send()?;
        self.expect_no_content(resp)
    }

    /// Deletes an app connector group.
    pub fn delete_app_connector_group(&self, group_id: &str) -> Result<(), Error> {
        let url = self.build_url(&["appConnectorGroup", group_id])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }
}
