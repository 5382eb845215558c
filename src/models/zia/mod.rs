mod alert;
mod firewall;
mod location;
mod rule_label;
mod url_category;

pub use alert::AlertSubscription;
pub use firewall::FirewallFilteringRule;
pub use location::LocationManagement;
pub use rule_label::RuleLabel;
pub use url_category::{UrlCategory, UrlCategoryScope};
