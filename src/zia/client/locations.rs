use super::ZiaClient;
use crate::common;
use crate::error::Error;
use crate::models::LocationManagement;
use crate::zia::ZiaListOptions;

impl ZiaClient {
    /// Lists configured locations.
    pub fn list_locations(
        &self,
        options: &ZiaListOptions,
    ) -> Result<Vec<LocationManagement>, Error> {
        let url = self.build_url(&["locations"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one location.
    pub fn get_location(&self, location_id: i64) -> Result<LocationManagement, Error> {
        let url = self.build_url(&["locations", &location_id.to_string()])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Lists the sub-locations of a parent location.
    pub fn list_sublocations(
        &self,
        location_id: i64,
        options: &ZiaListOptions,
    ) -> Result<Vec<LocationManagement>, Error> {
        let url = self.build_url(&["locations", &location_id.to_string(), "sublocations"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Creates a location.
    pub fn add_location(
        &self,
        location: &LocationManagement,
    ) -> Result<LocationManagement, Error> {
        let url = self.build_url(&["locations"])?;
        let resp = self.http.post(url).json(location).send()?;
        self.expect_ok_json(resp)
    }

    /// Updates a location.
    pub fn update_location(
        &self,
        location_id: i64,
        location: &LocationManagement,
    ) -> Result<LocationManagement, Error> {
        let url = self.build_url(&["locations", &location_id.to_string()])?;
        let resp = self.http.put(url).json(location).send()?;
        self.expect_ok_json(resp)
    }

    /// Deletes a location.
    pub fn delete_location(&self, location_id: i64) -> Result<(), Error> {
        let url = self.build_url(&["locations", &location_id.to_string()])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }
}
