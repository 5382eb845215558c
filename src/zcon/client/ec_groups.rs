use super::ZconClient;
use crate::error::Error;
use crate::models::EcGroup;

impl ZconClient {
    /// Lists edge connector groups.
    pub fn list_ec_groups(&self) -> Result<Vec<EcGroup>, Error> {
        let url = self.build_url(&["ecgroup"])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one edge connector group.
    pub fn get_ec_group(&self, group_id: i64) -> Result<EcGroup, Error> {
        let url = self.build_url(&["ecgroup", &group_id.to_string()])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Deletes an edge connector group. Groups are created through
    /// provisioning, not through this API.
    pub fn delete_ec_group(&self, group_id: i64) -> Result<(), Error> {
        let url = self.build_url(&["ecgroup", &group_id.to_string()])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }
}
