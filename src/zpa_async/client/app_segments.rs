use super::ZpaAsyncClient;
use crate::common;
use crate::error::Error;
use crate::models::{ApplicationSegment, PagedResponse};
use crate::zpa::ZpaPageOptions;

impl ZpaAsyncClient {
    /// Lists application segments for the customer.
    pub async fn list_application_segments(
        &self,
        options: &ZpaPageOptions,
    ) -> Result<PagedResponse<ApplicationSegment>, Error> {
        let url = self.build_url(&["application"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = req.send().await?;
        self.expect_ok_json(resp).await
    }

    /// Retrieves one application segment.
    pub async fn get_application_segment(
        &self,
        segment_id: &str,
        microtenant_id: Option<&str>,
    ) -> Result<ApplicationSegment, Error> {
        let url = self.build_url(&["application", segment_id])?;
        let mut req = self.http.get(url);
        if let Some(microtenant_id) = microtenant_id {
            req = req.query(&[("microtenantId", microtenant_id)]);
        }
        let resp = req.send().await?;
        self.expect_ok_json(resp).await
    }

    /// Creates an application segment.
    pub async fn add_application_segment(
        &self,
        segment: &ApplicationSegment,
    ) -> Result<ApplicationSegment, Error> {
        if segment.segment_group_id.as_deref().map_or(true, str::is_empty) {
            return Err(Error::Validation(
                "segment_group_id is required when creating an application segment".to_string(),
            ));
        }
        let url = self.build_url(&["application"])?;
        let resp = self.http.post(url).json(segment).send().await?;
        self.expect_ok_json(resp).await
    }

    /// Updates an application segment.
    pub async fn update_application_segment(
        &self,
        segment_id: &str,
        segment: &ApplicationSegment,
    ) -> Result<(), Error> {
        let url = self.build_url(&["application", segment_id])?;
        let resp = self.http.put(url).json(segment).send().await?;
        self.expect_no_content(resp).await
    }

    /// Deletes an application segment.
    pub async fn delete_application_segment(
        &self,
        segment_id: &str,
        force_delete: bool,
    ) -> Result<(), Error> {
        let url = self.build_url(&["application", segment_id])?;
        let mut req = self.http.delete(url);
        if force_delete {
            req = req.query(&[("forceDelete", "true")]);
        }
        let resp = req.send().await?;
        self.expect_no_content(resp).await
    }
}
