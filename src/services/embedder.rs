use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{EmbedError, EmbedResult};
use crate::models::{DataUri, EmbedReport};
use crate::services::mime::resolve_subtype;

/// Turns one image file into a one-line source file holding its data URI.
#[derive(Clone)]
pub struct Embedder {
    config: Config,
}

impl Embedder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read, encode, format and write. The output is only opened once the
    /// input has been read in full.
    pub fn run(&self) -> EmbedResult<EmbedReport> {
        let input = &self.config.input_path;
        let output = &self.config.output_path;

        let data = Self::read_input(input)?;
        debug!("Read {} bytes from {:?}", data.len(), input);

        let subtype = resolve_subtype(&self.config.mime, &data);
        let uri = DataUri::from_bytes(&subtype, &data);
        let source = Self::format_source(&self.config.const_name, &uri);

        Self::write_output(output, &source)?;
        info!("Wrote {} ({} bytes, image/{})", output.display(), source.len(), subtype);

        Ok(EmbedReport {
            input_bytes: data.len(),
            payload_len: uri.payload.len(),
            mime_subtype: subtype,
            output_path: output.clone(),
        })
    }

    pub fn read_input(path: &Path) -> EmbedResult<Vec<u8>> {
        let read_err = |source| EmbedError::Read {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(read_err)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data).map_err(read_err)?;
        Ok(data)
    }

    pub fn format_source(const_name: &str, uri: &DataUri) -> String {
        format!("const {} = \"{}\";", const_name, uri)
    }

    /// Truncates any existing file; no trailing newline is added.
    pub fn write_output(path: &Path, source: &str) -> EmbedResult<()> {
        let write_err = |source| EmbedError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(source.as_bytes()).map_err(write_err)?;
        writer.flush().map_err(write_err)
    }
}
