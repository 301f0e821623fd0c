//! Test world for Cucumber scenarios

use std::collections::HashMap;

use cucumber::World;

use crate::common::TestApp;

/// Test world that maintains state across scenario steps
#[derive(Debug, Default, World)]
pub struct TestWorld {
    /// Running application; started by the first step that needs it
    pub app: Option<TestApp>,

    /// Post ids by title
    pub posts: HashMap<String, String>,

    /// Id of the last volunteer request created
    pub last_request_id: Option<String>,

    /// Response from last API call
    pub last_response: Option<RecordedResponse>,
}

/// Status and parsed body of the last response
#[derive(Debug, Clone)]
pub struct RecordedResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl TestWorld {
    /// The running application, starting it on first use
    pub async fn app(&mut self) -> &mut TestApp {
        if self.app.is_none() {
            self.app = Some(TestApp::new().await);
        }
        self.app.as_mut().expect("app started above")
    }

    pub fn record(&mut self, response: crate::common::TestResponse) {
        let body = serde_json::from_slice(&response.body).unwrap_or(serde_json::Value::Null);
        self.last_response = Some(RecordedResponse {
            status: response.status.as_u16(),
            body,
        });
    }

    pub fn response(&self) -> &RecordedResponse {
        self.last_response.as_ref().expect("No response available")
    }

    pub fn post_id(&self, title: &str) -> String {
        self.posts
            .get(title)
            .cloned()
            .unwrap_or_else(|| panic!("No post titled {:?}", title))
    }
}
