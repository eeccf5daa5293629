use crate::core::io::sorting::sort_network_nodes;
use crate::core::io::traits::GraphFile;
use crate::core::models::ids::NodeId;
use crate::core::models::network::ScaffoldNetwork;
use slotmap::SecondaryMap;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{instrument, warn};

#[derive(Debug, Error)]
pub enum GmlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Graphics floats print their natural decimal expansion, but whole values
/// keep a trailing `.0` so downstream parsers always see a float token.
fn format_graphics_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Writer for the GML graph-exchange format consumed by visualization tools.
///
/// The document shape is a wire contract: downstream consumers match on the
/// literal `directed 0` line, the block indentation, and the `.0` suffix on
/// whole-valued graphics floats, so the emitted bytes must not drift.
pub struct GmlFile;

impl GraphFile for GmlFile {
    type Error = GmlError;

    #[instrument(skip_all, name = "gml_export")]
    fn write_to(network: &ScaffoldNetwork, writer: &mut impl Write) -> Result<(), Self::Error> {
        let sorted_nodes = sort_network_nodes(network);

        // Serialization-local ids: 0-based, assigned in canonical node order.
        let mut serials: SecondaryMap<NodeId, usize> = SecondaryMap::new();
        for (serial, canonical) in sorted_nodes.iter().enumerate() {
            serials.insert(canonical.id, serial);
        }

        writeln!(writer, "graph [")?;
        writeln!(writer, "directed 0")?;

        for canonical in &sorted_nodes {
            let scaffold = &canonical.source.scaffold;
            writeln!(writer, "node [")?;
            writeln!(writer, "    id {}", serials[canonical.id])?;
            writeln!(writer, "    label \"{}\"", scaffold.smiles)?;
            writeln!(writer, "    weight {}", scaffold.hierarchy_level)?;
            writeln!(writer, "    graphics [")?;
            writeln!(
                writer,
                "        w {}",
                format_graphics_float(scaffold.render_width)
            )?;
            writeln!(
                writer,
                "        h {}",
                format_graphics_float(scaffold.render_height)
            )?;
            writeln!(writer, "    ]")?;
            writeln!(writer, "]")?;
        }

        for canonical in &sorted_nodes {
            let target_serial = serials[canonical.id];
            for (parent_id, weight) in canonical.source.parent_edges() {
                let source_serial = match serials.get(parent_id) {
                    Some(serial) => *serial,
                    None => {
                        // Possible only when a re-insertion displaced the parent
                        // after this edge was drawn.
                        warn!(
                            child = %canonical.source.scaffold.smiles,
                            "Skipping edge whose parent node is no longer reachable by identifier."
                        );
                        continue;
                    }
                };
                writeln!(writer, "edge [")?;
                writeln!(writer, "    source {}", source_serial)?;
                writeln!(writer, "    target {}", target_serial)?;
                writeln!(writer, "    label \"{}\"", weight)?;
                writeln!(writer, "]")?;
            }
        }

        writeln!(writer, "]")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::scaffold::Scaffold;
    use std::fs;
    use tempfile::tempdir;

    /// Builds the acceptance scenario: B and C decompose to A, then the
    /// virtual root is attached.
    fn create_finished_scenario_network() -> ScaffoldNetwork {
        let mut network = ScaffoldNetwork::new();

        let mut scaffold_a = Scaffold::new("A", 1);
        scaffold_a.render_width = 40.0;
        scaffold_a.render_height = 40.0;

        let a_id = network.insert(scaffold_a);
        let b_id = network.insert(Scaffold::new("B", 2));
        let c_id = network.insert(Scaffold::new("C", 2));
        network.add_parent_edge(a_id, b_id, 2).unwrap();
        network.add_parent_edge(a_id, c_id, 1).unwrap();
        network.add_virtual_root().unwrap();

        network
    }

    #[test]
    fn test_document_matches_expected_bytes_exactly() {
        let mut network = ScaffoldNetwork::new();

        let mut benzene = Scaffold::new("c1ccccc1", 1);
        benzene.render_width = 40.0;
        benzene.render_height = 40.0;
        let mut biphenyl = Scaffold::new("c1ccc(-c2ccccc2)cc1", 2);
        biphenyl.render_width = 61.3;
        biphenyl.render_height = 27.0;

        let benzene_id = network.insert(benzene);
        let biphenyl_id = network.insert(biphenyl);
        network.add_parent_edge(benzene_id, biphenyl_id, 1).unwrap();

        let document = GmlFile::write_to_string(&network).unwrap();

        // Ascending SMILES order puts biphenyl (serial 0) before benzene
        // (serial 1) because '(' sorts below 'c'.
        let expected = r#"graph [
directed 0
node [
    id 0
    label "c1ccc(-c2ccccc2)cc1"
    weight 2
    graphics [
        w 61.3
        h 27.0
    ]
]
node [
    id 1
    label "c1ccccc1"
    weight 1
    graphics [
        w 40.0
        h 40.0
    ]
]
edge [
    source 1
    target 0
    label "1"
]
]
"#;
        assert_eq!(document, expected);
    }

    #[test]
    fn test_empty_network_serializes_to_a_valid_document() {
        let network = ScaffoldNetwork::new();

        let document = GmlFile::write_to_string(&network).unwrap();

        assert_eq!(document, "graph [\ndirected 0\n]\n");
    }

    #[test]
    fn test_scenario_network_serializes_four_nodes_and_three_edges() {
        let network = create_finished_scenario_network();

        let document = GmlFile::write_to_string(&network).unwrap();

        let expected = r#"graph [
directed 0
node [
    id 0
    label "A"
    weight 1
    graphics [
        w 40.0
        h 40.0
    ]
]
node [
    id 1
    label "B"
    weight 2
    graphics [
        w 0.0
        h 0.0
    ]
]
node [
    id 2
    label "C"
    weight 2
    graphics [
        w 0.0
        h 0.0
    ]
]
node [
    id 3
    label "ROOT"
    weight 0
    graphics [
        w 0.0
        h 0.0
    ]
]
edge [
    source 3
    target 0
    label "0"
]
edge [
    source 0
    target 1
    label "2"
]
edge [
    source 0
    target 2
    label "1"
]
]
"#;
        assert_eq!(document, expected);
    }

    #[test]
    fn test_block_counts_match_network_state() {
        let network = create_finished_scenario_network();

        let document = GmlFile::write_to_string(&network).unwrap();

        assert_eq!(
            document.matches("node [").count(),
            network.node_count()
        );
        assert_eq!(
            document.matches("edge [").count(),
            network.edge_count()
        );
    }

    #[test]
    fn test_repeated_serialization_is_byte_identical() {
        let network = create_finished_scenario_network();

        let first = GmlFile::write_to_string(&network).unwrap();
        let second = GmlFile::write_to_string(&network).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_insertion_order_does_not_change_the_document() {
        let build = |order: &[&str]| {
            let mut network = ScaffoldNetwork::new();
            for smiles in order {
                network.insert(Scaffold::new(smiles, 1));
            }
            let parent = network.find_node_by_smiles("CCN").unwrap();
            let child = network.find_node_by_smiles("CCNCC").unwrap();
            network.add_parent_edge(parent, child, 3).unwrap();
            network.add_virtual_root().unwrap();
            network
        };

        let forward = build(&["CCN", "CCNCC", "CCO"]);
        let reversed = build(&["CCO", "CCNCC", "CCN"]);

        assert_eq!(
            GmlFile::write_to_string(&forward).unwrap(),
            GmlFile::write_to_string(&reversed).unwrap()
        );
    }

    #[test]
    fn test_edges_to_displaced_parents_are_skipped() {
        let mut network = ScaffoldNetwork::new();
        let old_parent = network.insert(Scaffold::new("A", 1));
        let child = network.insert(Scaffold::new("B", 2));
        network.add_parent_edge(old_parent, child, 1).unwrap();
        network.insert(Scaffold::new("A", 1));

        let document = GmlFile::write_to_string(&network).unwrap();

        assert_eq!(document.matches("node [").count(), 2);
        assert_eq!(document.matches("edge [").count(), 0);
        assert!(document.contains("label \"A\""));
        assert!(document.contains("label \"B\""));
    }

    #[test]
    fn test_graphics_float_formatting() {
        assert_eq!(format_graphics_float(40.0), "40.0");
        assert_eq!(format_graphics_float(0.0), "0.0");
        assert_eq!(format_graphics_float(61.3), "61.3");
        assert_eq!(format_graphics_float(27.25), "27.25");
    }

    #[test]
    fn test_write_to_path_creates_the_file() {
        let network = create_finished_scenario_network();
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.gml");

        GmlFile::write_to_path(&network, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, GmlFile::write_to_string(&network).unwrap());
    }
}
