//! Work Order Endpoints

use super::{accepted, ApiClient, ApiError, MultipartField, Upload};
use crate::config::{query_value, segment};
use crate::models::WorkOrder;

/// Multipart field names expected by the close endpoint
pub const CLOSE_STATUS_FIELD: &str = "STATUS";
pub const CLOSE_IMAGES_FIELD: &str = "closing_images[]";

pub fn search_path(query: &str) -> String {
    format!("/api/workorders/search?query={}", query_value(query))
}

pub fn children_path(parent: &str) -> String {
    format!("/api/workorders/childs/{}", segment(parent))
}

/// Form body that closes a work order with its proof images
pub fn close_fields(images: Vec<Upload>) -> Vec<MultipartField> {
    let mut fields = vec![MultipartField::text(CLOSE_STATUS_FIELD, "CLOSED")];
    fields.extend(images.into_iter().map(|image| MultipartField::file(CLOSE_IMAGES_FIELD, image)));
    fields
}

impl ApiClient {
    pub async fn search_workorders(&self, query: &str) -> Result<Vec<WorkOrder>, ApiError> {
        self.get_list(&search_path(query)).await
    }

    pub async fn child_workorders(&self, parent: &str) -> Result<Vec<WorkOrder>, ApiError> {
        self.get_list(&children_path(parent)).await
    }

    pub async fn close_workorder(&self, id: &str, images: Vec<Upload>) -> Result<(), ApiError> {
        let path = format!("/api/workorders/{}", segment(id));
        accepted(self.put_multipart(&path, close_fields(images)).await?).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_path_encodes_query() {
        assert_eq!(search_path("WO12"), "/api/workorders/search?query=WO12");
        assert_eq!(search_path("A&B"), "/api/workorders/search?query=A%26B");
        assert_eq!(children_path("WO12"), "/api/workorders/childs/WO12");
    }

    #[test]
    fn test_close_fields_status_then_images() {
        let image = Upload { file_name: "a.jpg".into(), mime: "image/jpeg".into(), bytes: vec![1, 2] };
        let fields = close_fields(vec![image.clone(), image]);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], MultipartField::text("STATUS", "CLOSED"));
        assert!(fields[1..]
            .iter()
            .all(|f| matches!(f, MultipartField::File { name, .. } if name == "closing_images[]")));
    }
}
