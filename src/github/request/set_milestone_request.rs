use serde::Serialize;

#[derive(Serialize)]
pub struct SetMilestoneRequest {
    milestone: u64,
}

impl SetMilestoneRequest {
    pub fn new(milestone: u64) -> Self {
        SetMilestoneRequest { milestone }
    }
}
