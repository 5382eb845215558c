use super::ZiaClient;
use crate::error::Error;
use crate::models::AlertSubscription;

impl ZiaClient {
    /// Lists alert subscriptions.
    pub fn list_alert_subscriptions(&self) -> Result<Vec<AlertSubscription>, Error> {
        let url = self.build_url(&["alertSubscriptions"])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one alert subscription.
    pub fn get_alert_subscription(&self, subscription_id: i64) -> Result<AlertSubscription, Error> {
        let url = self.build_url(&["alertSubscriptions", &subscription_id.to_string()])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Creates an alert subscription. A recipient address is mandatory.
    pub fn add_alert_subscription(
        &self,
        subscription: &AlertSubscription,
    ) -> Result<AlertSubscription, Error> {
        if subscription.email.as_deref().map_or(true, str::is_empty) {
            return Err(Error::Validation(
                "email is required for an alert subscription".to_string(),
            ));
        }
        let url = self.build_url(&["alertSubscriptions"])?;
        let resp = self.http.post(url).json(subscription).send()?;
        self.expect_ok_json(resp)
    }

    /// Updates an alert subscription.
    pub fn update_alert_subscription(
        &self,
        subscription_id: i64,
        subscription: &AlertSubscription,
    ) -> Result<AlertSubscription, Error> {
        let url = self.build_url(&["alertSubscriptions", &subscription_id.to_string()])?;
        let resp = self.http.put(url).json(subscription).send()?;
        self.expect_ok_json(resp)
    }

    /// Deletes an alert subscription.
    pub fn delete_alert_subscription(&self, subscription_id: i64) -> Result<(), Error> {
        let url = self.build_url(&["alertSubscriptions", &subscription_id.to_string()])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }
}
