use super::ZtwClient;
use crate::error::Error;
use crate::models::NetworkService;

impl ZtwClient {
    /// Lists network service definitions.
    pub fn list_network_services(&self) -> Result<Vec<NetworkService>, Error> {
        let url = self.build_url(&["networkServices"])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one network service.
    pub fn get_network_service(&self, service_id: i64) -> Result<NetworkService, Error> {
        let url = self.build_url(&["networkServices", &service_id.to_string()])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Creates a network service.
    pub fn add_network_service(&self, service: &NetworkService) -> Result<NetworkService, Error> {
        let url = self.build_url(&["networkServices"])?;
        let resp = self.http.post(url).json(service).send()?;
        self.expect_ok_json(resp)
    }

    /// Updates a network service.
    pub fn update_network_service(
        &self,
        service_id: i64,
        service: &NetworkService,
    ) -> Result<NetworkService, Error> {
        let url = self.build_url(&["networkServices", &service_id.to_string()])?;
        let resp = self.http.put(url).json(service).send()?;
        self.expect_ok_json(resp)
    }

    /// Deletes a network service.
    pub fn delete_network_service(&self, service_id: i64) -> Result<(), Error> {
        let url = self.build_url(&["networkServices", &service_id.to_string()])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }
}
