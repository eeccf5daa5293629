use crate::core::models::network::ScaffoldNetwork;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for writing scaffold network export formats.
///
/// This trait provides a common API for network export operations. A network
/// is only ever written, never read back (it is rebuilt from scratch by the
/// generation algorithm on every run), so the interface is write-only.
/// Implementors handle format-specific serialization.
pub trait GraphFile {
    /// The error type for export operations.
    type Error: Error + From<io::Error>;

    /// Writes a scaffold network to a writer.
    ///
    /// # Arguments
    ///
    /// * `network` - The scaffold network to write.
    /// * `writer` - The writer to output to.
    ///
    /// # Return
    ///
    /// Returns `Ok(())` on success.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or I/O operations encounter issues.
    fn write_to(network: &ScaffoldNetwork, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes a scaffold network to a file path.
    ///
    /// # Arguments
    ///
    /// * `network` - The scaffold network to write.
    /// * `path` - The path to the file to write.
    ///
    /// # Return
    ///
    /// Returns `Ok(())` on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        network: &ScaffoldNetwork,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(network, &mut writer)
    }

    /// Serializes a scaffold network to an in-memory string.
    ///
    /// # Arguments
    ///
    /// * `network` - The scaffold network to write.
    ///
    /// # Return
    ///
    /// Returns the complete export document as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails; for purely in-memory formats
    /// this cannot happen under well-formed input.
    fn write_to_string(network: &ScaffoldNetwork) -> Result<String, Self::Error> {
        let mut buffer = Vec::new();
        Self::write_to(network, &mut buffer)?;
        Ok(String::from_utf8(buffer).expect("Export formats emit UTF-8 text"))
    }
}
