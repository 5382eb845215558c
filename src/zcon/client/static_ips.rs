use super::ZconClient;
use crate::error::Error;
use crate::models::StaticIp;

impl ZconClient {
    /// Lists registered static IPs.
    pub fn list_static_ips(&self) -> Result<Vec<StaticIp>, Error> {
        let url = self.build_url(&["staticIP"])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one static IP.
    pub fn get_static_ip(&self, static_ip_id: i64) -> Result<StaticIp, Error> {
        let url = self.build_url(&["staticIP", &static_ip_id.to_string()])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Registers a static IP. Overriding the geolocation requires explicit
    /// coordinates, per the API contract.
    pub fn add_static_ip(&self, static_ip: &StaticIp) -> Result<StaticIp, Error> {
        if static_ip.geo_override && (static_ip.latitude.is_none() || static_ip.longitude.is_none())
        {
            return Err(Error::Validation(
                "latitude and longitude are required when geo_override is set".to_string(),
            ));
        }
        let url = self.build_url(&["staticIP"])?;
        let resp = self.http.post(url).json(static_ip).send()?;
        self.expect_ok_json(resp)
    }

    /// Updates a static IP.
    pub fn update_static_ip(
        &self,
        static_ip_id: i64,
        static_ip: &StaticIp,
    ) -> Result<StaticIp, Error> {
        let url = self.build_url(&["staticIP", &static_ip_id.to_string()])?;
        let resp = self.http.put(url).json(static_ip).send()?;
        self.expect_ok_json(resp)
    }

    /// Deletes a static IP.
    pub fn delete_static_ip(&self, static_ip_id: i64) -> Result<(), Error> {
        let url = self.build_url(&["staticIP", &static_ip_id.to_string()])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }
}
