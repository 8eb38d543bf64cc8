pub const TARGET_PREFIX: &str = "Target: ";

/// Mutations needed to leave exactly one `Target: ` label on a pull
/// request, the one matching the current base branch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LabelPlan {
    pub remove: Vec<String>,
    pub add: Option<String>,
}

pub fn plan(current: &[String], target_label: &str) -> LabelPlan {
    let mut needs_label = true;
    let mut remove = Vec::new();

    for name in current {
        if name.starts_with(TARGET_PREFIX) {
            if name == target_label {
                needs_label = false;
            } else {
                remove.push(name.to_owned());
            }
        }
    }

    LabelPlan {
        remove,
        add: needs_label.then(|| target_label.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn should_add_the_target_label_when_absent() {
        let plan = plan(&labels(&["bug"]), "Target: v5.0.x");

        assert_eq!(plan.remove, Vec::<String>::new());
        assert_eq!(plan.add, Some("Target: v5.0.x".to_owned()));
    }

    #[test]
    fn should_remove_stale_target_labels() {
        let plan = plan(
            &labels(&["Target: v4.0.x", "bug", "Target: v3.2.x"]),
            "Target: v5.0.x",
        );

        assert_eq!(plan.remove, labels(&["Target: v4.0.x", "Target: v3.2.x"]));
        assert_eq!(plan.add, Some("Target: v5.0.x".to_owned()));
    }

    #[test]
    fn should_keep_a_matching_target_label() {
        let plan = plan(&labels(&["Target: v5.0.x", "bug"]), "Target: v5.0.x");

        assert_eq!(plan, LabelPlan::default());
    }

    #[test]
    fn should_replace_a_stale_label_while_keeping_the_match() {
        let plan = plan(
            &labels(&["Target: v5.0.x", "Target: v4.0.x"]),
            "Target: v5.0.x",
        );

        assert_eq!(plan.remove, labels(&["Target: v4.0.x"]));
        assert_eq!(plan.add, None);
    }

    #[test]
    fn should_ignore_labels_without_the_target_prefix() {
        let plan = plan(
            &labels(&["target: v4.0.x", "Targeted"]),
            "Target: v5.0.x",
        );

        assert_eq!(plan.remove, Vec::<String>::new());
        assert_eq!(plan.add, Some("Target: v5.0.x".to_owned()));
    }
}
