use super::ZtwClient;
use crate::error::Error;
use crate::models::IpGroup;

impl ZtwClient {
    /// Lists source IP groups.
    pub fn list_ip_groups(&self) -> Result<Vec<IpGroup>, Error> {
        let url = self.build_url(&["ipSourceGroups"])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one source IP group.
    pub fn get_ip_group(&self, group_id: i64) -> Result<IpGroup, Error> {
        let url = self.build_url(&["ipSourceGroups", &group_id.to_string()])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Creates a source IP group.
    pub fn add_ip_group(&self, group: &IpGroup) -> Result<IpGroup, Error> {
        let url = self.build_url(&["ipSourceGroups"])?;
        let resp = self.http.post(url).json(group).send()?;
        self.expect_ok_json(resp)
    }

    /// Updates a source IP group.
    pub fn update_ip_group(&self, group_id: i64, group: &IpGroup) -> Result<IpGroup, Error> {
        let url = self.build_url(&["ipSourceGroups", &group_id.to_string()])?;
        let resp = self.http.put(url).json(group).send()?;
        self.expect_ok_json(resp)
    }

    /// Deletes a source IP group.
    pub fn delete_ip_group(&self, group_id: i64) -> Result<(), Error> {
        let url = self.build_url(&["ipSourceGroups", &group_id.to_string()])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }
}
