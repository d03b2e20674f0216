use crate::model::{ModelSpec, TableModel};

mod properties;

/// Model where a..i form a chain, each successor at rank 0.
pub(crate) fn chain_model() -> TableModel {
    TableModel::new(ModelSpec {
        chars: "abcdefghi".to_string(),
        successors: ["b", "c", "d", "e", "f", "g", "h", "i", ""]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
    .unwrap()
}
