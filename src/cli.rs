use clap::Parser;
use log::{error, info};

use crate::config::Config;
use crate::error::EmbedResult;
use crate::models::EmbedReport;
use crate::services::Embedder;

#[derive(Parser, Debug)]
#[command(name = "logo-embed")]
#[command(author, version, about = "Embed the logo image as a base64 data URI constant", long_about = None)]
pub struct Cli {
    /// Derive the MIME subtype from the image's magic bytes instead of using jpeg
    #[arg(long)]
    pub sniff_mime: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new().sniff_mime(self.sniff_mime)
    }
}

pub fn handle_embed(config: Config) -> EmbedResult<EmbedReport> {
    info!(
        "Embedding {} into {}",
        config.input_path.display(),
        config.output_path.display()
    );

    let embedder = Embedder::new(config);
    match embedder.run() {
        Ok(report) => {
            info!(
                "Embedded {} bytes as {} base64 characters (image/{})",
                report.input_bytes, report.payload_len, report.mime_subtype
            );
            Ok(report)
        }
        Err(e) => {
            error!("{}", e);
            Err(e)
        }
    }
}
