// crates/infra/src/output/writer.rs
use std::fs::File;
use std::io::{self, BufWriter, Write};

use gapdash_shared_kernel::{InfraResult, InfrastructureError};

use crate::output::config::RenderConfig;

/// Destination for rendered output: a buffered file when `--output` is
/// set, buffered stdout otherwise.
pub struct OutputWriter(Box<dyn Write>);

impl OutputWriter {
    pub fn create(config: &RenderConfig) -> InfraResult<Self> {
        let writer: Box<dyn Write> = if let Some(path) = &config.output {
            let file = File::create(path).map_err(|source| InfrastructureError::FileWrite {
                path: path.clone(),
                source,
            })?;
            Box::new(BufWriter::new(file))
        } else {
            Box::new(BufWriter::new(io::stdout()))
        };
        Ok(Self(writer))
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
