use serde::Serialize;

#[derive(Serialize)]
pub struct AddLabelsRequest {
    labels: Vec<String>,
}

impl AddLabelsRequest {
    pub fn new(labels: Vec<String>) -> Self {
        AddLabelsRequest { labels }
    }
}
