use crate::core::io::sorting::sort_network_nodes;
use crate::core::io::traits::GraphFile;
use crate::core::models::network::ScaffoldNetwork;
use std::collections::BTreeSet;
use std::io::{self, Write};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writer for the scaffold property table, a CSV companion to the graph
/// document.
///
/// Rows appear in ascending canonical SMILES order. The fixed columns are
/// followed by the sorted union of all property names attached to any live
/// scaffold; a scaffold without a given property leaves that cell empty.
pub struct TableFile;

impl GraphFile for TableFile {
    type Error = TableError;

    #[instrument(skip_all, name = "table_export")]
    fn write_to(network: &ScaffoldNetwork, writer: &mut impl Write) -> Result<(), Self::Error> {
        let sorted_nodes = sort_network_nodes(network);

        let mut property_columns: BTreeSet<&str> = BTreeSet::new();
        for canonical in &sorted_nodes {
            for (name, _) in canonical.source.scaffold.properties() {
                property_columns.insert(name);
            }
        }

        let mut csv_writer = csv::Writer::from_writer(writer);

        let mut header = vec![
            "smiles",
            "hierarchy_level",
            "parent_count",
            "child_count",
            "molecule_count",
        ];
        header.extend(property_columns.iter().copied());
        csv_writer.write_record(&header)?;

        for canonical in &sorted_nodes {
            let node = canonical.source;
            let scaffold = &node.scaffold;
            let mut record = vec![
                scaffold.smiles.clone(),
                scaffold.hierarchy_level.to_string(),
                node.parents().len().to_string(),
                node.children().len().to_string(),
                node.molecules().len().to_string(),
            ];
            for name in &property_columns {
                let cell = scaffold
                    .property(name)
                    .map_or_else(String::new, |value| value.to_string());
                record.push(cell);
            }
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
