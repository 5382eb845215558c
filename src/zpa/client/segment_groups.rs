use super::ZpaClient;
use crate::common;
use crate::error::Error;
use crate::models::{PagedResponse, SegmentGroup};
use crate::zpa::ZpaPageOptions;

impl ZpaClient {
    /// Lists segment groups for the customer.
    pub fn list_segment_groups(
        &self,
        options: &ZpaPageOptions,
    ) -> Result<PagedResponse<SegmentGroup>, Error> {
        let url = self.build_url(&["segmentGroup"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one segment group.
    pub fn get_segment_group(
        &self,
        group_id: &str,
        microtenant_id: Option<&str>,
    ) -> Result<SegmentGroup, Error> {
        let url = self.build_url(&["segmentGroup", group_id])?;
        let mut req = self.http.get(url);
        if let Some(microtenant_id) = microtenant_id {
            req = req.query(&[("microtenantId", microtenant_id)]);
        }
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Creates a segment group.
    pub fn add_segment_group(&self, group: &SegmentGroup) -> Result<SegmentGroup, Error> {
        let url = self.build_url(&["segmentGroup"])?;
        let resp = self.http.post(url).json(group).send()?;
        self.expect_ok_json(resp)
    }

    /// Updates a segment group.
    pub fn update_segment_group(
        &self,
        group_id: &str,
        group: &SegmentGroup,
    ) -> Result<(), Error> {
        let url = self.build_url(&["segmentGroup", group_id])?;
        let resp = self.http.put(url).json(group).send()?;
        self.expect_no_content(resp)
    }

    /// Deletes a segment group.
    pub fn delete_segment_group(&self, group_id: &str) -> Result<(), Error> {
        let url = self.build_url(&["segmentGroup", group_id])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
    }
}
