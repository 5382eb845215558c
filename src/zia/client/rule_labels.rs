use super::ZiaClient;
use crate::common;
use crate::error::Error;
use crate::models::RuleLabel;
use crate::zia::ZiaListOptions;

impl ZiaClient {
    /// Lists rule labels.
    pub fn list_rule_labels(&self, options: &ZiaListOptions) -> Result<Vec<RuleLabel>, Error> {
        let url = self.build_url(&["ruleLabels"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one rule label.
    pub fn get_rule_label(&self, label_id: i64) -> Result<RuleLabel, Error> {
        let url = self.build_url(&["ruleLabels", &label_id.to_string()])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Creates a rule label.
    pub fn add_rule_label(&self, label: &RuleLabel) -> Result<RuleLabel, Error> {
        let url = self.build_url(&["ruleLabels"])?;
        let resp = self.http.post(url).json(label).send()?;
        self.expect_ok_json(resp)
    }

    /// Updates a rule label.
    pub fn update_rule_label(&self, label_id: i64, label: &RuleLabel) -> Result<RuleLabel, Error> {
        let url = self.build_url(&["ruleLabels", &label_id.to_string()])?;
        let resp = self.http.put(url).json(label).send()?;
        self.expect_ok_json(resp)
    }

    /// Deletes a rule label.
    pub fn delete_rule_label(&self, label_id: i64) -> Result<(), Error> {
        let url = self.build_url(&["ruleLabels", &label_id.to_string()])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }
}
