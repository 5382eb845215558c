mod app_connector_group;
mod app_segment;
mod paged;
mod segment_group;
mod server_group;

pub use app_connector_group::AppConnectorGroup;
pub use app_segment::{ApplicationSegment, TcpPortRange};
pub use paged::PagedResponse;
pub use segment_group::SegmentGroup;
pub use server_group::{AppServer, ServerGroup};
