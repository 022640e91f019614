use crate::formatting::DEFAULT_DELIMITER;
use crate::observability::labels::Labels;
use crate::processor::NidProcessor;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use std::collections::BTreeMap;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NidConfig {
    /// Inserted between the date part and the serial part when formatting
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Extra labels attached to every metric emitted by the processor
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_owned()
}

impl NidConfig {
    pub fn new() -> Self {
        Self {
            delimiter: default_delimiter(),
            labels: BTreeMap::new(),
        }
    }

    pub fn delimiter(&self, delimiter: &str) -> Self {
        self.mutate_clone(|x| x.delimiter = delimiter.to_owned())
    }

    pub fn label(&self, key: &str, value: &str) -> Self {
        self.mutate_clone(|x| {
            x.labels.insert(key.to_owned(), value.to_owned());
        })
    }

    pub fn build(&self) -> NidProcessor {
        NidProcessor::new(self.delimiter.clone(), &Labels::from(&self.labels))
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

impl Default for NidConfig {
    fn default() -> Self {
        Self::new()
    }
}
