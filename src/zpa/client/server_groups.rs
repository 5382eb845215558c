use super::ZpaClient;
use crate::common;
use crate::error::Error;
use crate::models::{PagedResponse, ServerGroup};
use crate::zpa::ZpaPageOptions;

impl ZpaClient {
    /// Lists server groups for the customer.
    pub fn list_server_groups(
        &self,
        options: &ZpaPageOptions,
    ) -> Result<PagedResponse<ServerGroup>, Error> {
        let url = self.build_url(&["serverGroup"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one server group.
    pub fn get_server_group(
        &self,
        group_id: &str,
        microtenant_id: Option<&str>,
    ) -> Result<ServerGroup, Error> {
        let url = self.build_url(&["serverGroup", group_id])?;
        let mut req = self.http.get(url);
        if let Some(microtenant_id) = microtenant_id {
            req = req.query(&[("microtenantId", microtenant_id)]);
        }
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Creates a server group. Dynamic discovery and an explicit server
    /// list are mutually exclusive.
    pub fn add_server_group(&self, group: &ServerGroup) -> Result<ServerGroup, Error> {
        if group.dynamic_discovery == Some(true) && !group.servers.is_empty() {
            return Err(Error::Validation(
                "servers must not be set when dynamic_discovery is enabled".to_string(),
            ));
        }
        let url = self.build_url(&["serverGroup"])?;
        let resp = self.http.post(url).json(group).send()?;
        self.expect_ok_json(resp)
    }

    /// Updates a server group.
    pub fn update_server_group(&self, group_id: &str, group: &ServerGroup) -> Result<(), Error> {
        let url = self.build_url(&["serverGroup", group_id])?;
        let resp = self.http.put(url).json(group).send()?;
        self.expect_no_content(resp)
    }

    /// Deletes a server group.
    pub fn delete_server_group(&self, group_id: &str) -> Result<(), Error> {
        let url = self.build_url(&["serverGroup", group_id])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }
}
