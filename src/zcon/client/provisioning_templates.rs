use super::ZconClient;
use crate::error::Error;
use crate::models::ProvisioningTemplate;

impl ZconClient {
    /// Lists connector provisioning templates.
    pub fn list_provisioning_templates(&self) -> Result<Vec<ProvisioningTemplate>, Error> {
        let url = self.build_url(&["provisioningTemplate"])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one provisioning template.
    pub fn get_provisioning_template(
        &self,
        template_id: i64,
    ) -> Result<ProvisioningTemplate, Error> {
        let url = self.build_url(&["provisioningTemplate", &template_id.to_string()])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Creates a provisioning template.
    pub fn add_provisioning_template(
        &self,
        template: &ProvisioningTemplate,
    ) -> Result<ProvisioningTemplate, Error> {
        let url = self.build_url(&["provisioningTemplate"])?;
        let resp = self.http.post(url).json(template).send()?;
        self.expect_ok_json(resp)
    }

    /// Updates a provisioning template.
    pub fn update_provisioning_template(
        &self,
        template_id: i64,
        template: &ProvisioningTemplate,
    ) -> Result<ProvisioningTemplate, Error> {
        let url = self.build_url(&["provisioningTemplate", &template_id.to_string()])?;
        let resp = self.http.put(url).json(template).send()?;
        self.expect_ok_json(resp)
    }

    /// Deletes a provisioning template.
    pub fn delete_provisioning_template(&self, template_id: i64) -> Result<(), Error> {
        let url = self.build_url(&["provisioningTemplate", &template_id.to_string()])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }
}
