use super::{ZtwClient, FORWARD_METHODS};
use crate::error::Error;
use crate::models::ForwardingRule;

impl ZtwClient {
    /// Lists workload forwarding rules.
    pub fn list_forwarding_rules(&self) -> Result<Vec<ForwardingRule>, Error> {
        let url = self.build_url(&["ecRules", "ecRdr"])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one forwarding rule.
    pub fn get_forwarding_rule(&self, rule_id: i64) -> Result<ForwardingRule, Error> {
        let url = self.build_url(&["ecRules", "ecRdr", &rule_id.to_string()])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Creates a forwarding rule. The forward method is checked against
    /// the supported set before the call.
    pub fn add_forwarding_rule(&self, rule: &ForwardingRule) -> Result<ForwardingRule, Error> {
        self.check_forward_method(rule)?;
        let url = self.build_url(&["ecRules", "ecRdr"])?;
        let resp = self.http.post(url).json(rule).send()?;
        self.expect_ok_json(resp)
    }

    /// Updates a forwarding rule.
    pub fn update_forwarding_rule(
        &self,
        rule_id: i64,
        rule: &ForwardingRule,
    ) -> Result<ForwardingRule, Error> {
        self.check_forward_method(rule)?;
        let url = self.build_url(&["ecRules", "ecRdr", &rule_id.to_string()])?;
        let resp = self.http.put(url).json(rule).send()?;
        self.expect_ok_json(resp)
    }

    /// Deletes a forwarding rule.
    pub fn delete_forwarding_rule(&self, rule_id: i64) -> Result<(), Error> {
        let url = self.build_url(&["ecRules", "ecRdr", &rule_id.to_string()])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }

    fn check_forward_method(&self, rule: &ForwardingRule) -> Result<(), Error> {
        match rule.forward_method.as_deref() {
            None => Ok(()),
            Some(method) if FORWARD_METHODS.contains(&method) => Ok(()),
            Some(method) => Err(Error::Validation(format!(
                "unsupported forward method {method:?}, expected one of {FORWARD_METHODS:?}"
            ))),
        }
    }
}
