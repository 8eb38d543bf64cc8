use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Milestone {
    pub number: u64,
    pub title: String,
}
