// ABOUTME: Upload endpoints: multipart image upload
// ABOUTME: The multipart body carries its own content type; the pipeline injects none
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::client::{ApiClient, RequestConfig};
use crate::errors::ClientResult;
use crate::models::upload::UploadedImage;
use crate::transport::MultipartFile;

/// Handle for the upload endpoints
#[derive(Clone, Copy)]
pub struct UploadsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl UploadsApi<'_> {
    /// Upload an image and return its public URL.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn upload_image(
        &self,
        file_name: impl Into<String>,
        mime: impl Into<String>,
        content: Vec<u8>,
    ) -> ClientResult<UploadedImage> {
        let file = MultipartFile {
            field: "file".to_owned(),
            file_name: file_name.into(),
            mime: mime.into(),
            content,
        };
        self.client
            .call(RequestConfig::post("/api/upload/image").with_multipart(file))
            .await
    }
}
