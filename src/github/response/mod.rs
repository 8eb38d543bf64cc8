mod label_response;
mod milestone_response;
mod pull_request_response;

pub use label_response::Label;
pub use milestone_response::Milestone;
pub use pull_request_response::PullRequest;
