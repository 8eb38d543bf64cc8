pub mod add_labels_request;
pub mod set_milestone_request;
