use std::collections::BTreeMap;

use metrics::{IntoLabels, Label, SharedString};

/// Labels attached to every metric of a [`crate::NidProcessor`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    /// Copy of these labels extended with `additional_labels`, e.g. the outcome
    /// of a single check.
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(&'static str, impl Into<SharedString> + Clone)],
    ) -> Labels {
        let mut tags = self.0.clone();
        tags.extend(additional_labels.iter().map(Label::from));
        Labels(tags)
    }
}

/// Configured labels are emitted in key order.
impl From<&BTreeMap<String, String>> for Labels {
    fn from(labels: &BTreeMap<String, String>) -> Self {
        Labels(
            labels
                .iter()
                .map(|(key, value)| Label::new(key.clone(), value.clone()))
                .collect(),
        )
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
