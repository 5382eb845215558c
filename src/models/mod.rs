mod common;
mod zcc;
mod zcon;
mod zdx;
mod zia;
mod zpa;
mod ztw;

pub use common::{CommonIdName, LastModifiedInfo, PortRange, ResourceReference};
pub use zcc::{
    CompanyInfo, Device, DnsSearchDomainsEntry, ForwardingProfile, ForwardingProfileAction,
};
pub use zcon::{EcGroup, ProvisioningTemplate, StaticIp};
pub use zdx::{
    Alert, Application, ApplicationScore, Datapoint, DeviceSummary, ZdxPage,
};
pub use zia::{
    AlertSubscription, FirewallFilteringRule, LocationManagement, RuleLabel, UrlCategory,
    UrlCategoryScope,
};
pub use zpa::{
    AppConnectorGroup, AppServer, ApplicationSegment, PagedResponse, SegmentGroup, ServerGroup,
    TcpPortRange,
};
pub use ztw::{ForwardingRule, IpGroup, NetworkService};
