use super::ZiaClient;
use crate::error::Error;
use crate::models::FirewallFilteringRule;

impl ZiaClient {
    /// Lists firewall filtering rules.
    pub fn list_firewall_rules(&self) -> Result<Vec<FirewallFilteringRule>, Error> {
        let url = self.build_url(&["firewallFilteringRules"])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one firewall filtering rule.
    pub fn get_firewall_rule(&self, rule_id: i64) -> Result<FirewallFilteringRule, Error> {
        let url = self.build_url(&["firewallFilteringRules", &rule_id.to_string()])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Creates a firewall filtering rule.
    pub fn add_firewall_rule(
        &self,
        rule: &FirewallFilteringRule,
    ) -> Result<FirewallFilteringRule, Error> {
        let url = self.build_url(&["firewallFilteringRules"])?;
        let resp = self.http.post(url).json(rule).send()?;
        self.expect_ok_json(resp)
    }

    /// Updates a firewall filtering rule.
    pub fn update_firewall_rule(
        &self,
        rule_id: i64,
        rule: &FirewallFilteringRule,
    ) -> Result<FirewallFilteringRule, Error> {
        let url = self.build_url(&["firewallFilteringRules", &rule_id.to_string()])?;
        let resp = self.http.put(url).json(rule).send()?;
        self.expect_ok_json(resp)
    }

    /// Deletes a firewall filtering rule.
    pub fn delete_firewall_rule(&self, rule_id: i64) -> Result<(), Error> {
        let url = self.build_url(&["firewallFilteringRules", &rule_id.to_string()])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }
}
