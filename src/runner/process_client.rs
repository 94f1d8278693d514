//! @ai:module:intent Drive the external corrector through one batched pipe exchange
//! @ai:module:layer infrastructure
//! @ai:module:public_api ProcessCorrectionClient
//! @ai:module:stateless true

use crate::config::{CorrectorConfig, DuplicatePolicy};
use crate::error::{Error, Result};
use crate::runner::client::CorrectionClientTrait;
use crate::runner::response::{decode_output, PredictionResult};
use std::io;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{ChildStdin, Command};

/// @ai:intent Client that spawns the corrector once per batch
///
/// Writing stdin and draining stdout/stderr run as separate tasks so a
/// corrector that fills its output pipe before reading all input cannot
/// deadlock the exchange. The timeout bounds the whole exchange, from spawn
/// until both output pipes close, so it must cover the full batch.
pub struct ProcessCorrectionClient {
    config: CorrectorConfig,
    timeout: Duration,
}

impl ProcessCorrectionClient {
    /// @ai:intent Create a client from corrector configuration
    /// @ai:effects pure
    pub fn new(config: CorrectorConfig) -> Self {
        let timeout = config.timeout();
        Self { config, timeout }
    }

    /// @ai:intent Override the configured timeout
    /// @ai:effects pure
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// @ai:intent Arguments for one invocation; the count flag only when it differs from the default
    /// @ai:effects pure
    fn invocation_args(&self, count: u32) -> Vec<String> {
        let mut args = self.config.args.clone();

        if count != self.config.default_count {
            args.push(self.config.count_flag.clone());
            args.push(count.to_string());
        }
        args
    }

    fn duplicates(&self) -> DuplicatePolicy {
        self.config.duplicates
    }
}

impl CorrectionClientTrait for ProcessCorrectionClient {
    /// @ai:intent Exchange the whole batch with a fresh corrector process
    /// @ai:effects io, process:spawn
    async fn query(&self, misspellings: &[String], count: u32) -> Result<PredictionResult> {
        if count == 0 {
            return Err(Error::InvalidCount(count));
        }

        let args = self.invocation_args(count);
        let program = &self.config.program;

        tracing::info!(
            "Running corrector {} {:?} on {} terms",
            program.display(),
            args,
            misspellings.len()
        );

        let mut child = Command::new(program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| Error::Spawn {
                program: program.clone(),
                source,
            })?;

        let stdin = child.stdin.take().ok_or_else(|| missing_pipe("stdin"))?;
        let stdout = child.stdout.take().ok_or_else(|| missing_pipe("stdout"))?;
        let stderr = child.stderr.take().ok_or_else(|| missing_pipe("stderr"))?;

        let started = Instant::now();
        let mut writer = tokio::spawn(write_batch(stdin, batch_payload(misspellings)));
        let mut reader = tokio::spawn(drain(stdout));
        let mut diagnostics = tokio::spawn(drain(stderr));

        let exchange = async {
            let status = child.wait().await?;
            let output = (&mut reader).await.map_err(io::Error::other)??;
            let errors = (&mut diagnostics).await.map_err(io::Error::other)??;
            let written = (&mut writer).await.map_err(io::Error::other)?;
            Ok::<_, Error>((status, output, errors, written))
        };

        let outcome = tokio::time::timeout(self.timeout, exchange).await;

        let (status, output, errors, written) = match outcome {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!("Corrector exceeded {:?}; terminating it", self.timeout);

                if let Err(e) = child.kill().await {
                    tracing::warn!("Failed to kill corrector: {}", e);
                }
                writer.abort();
                reader.abort();
                diagnostics.abort();
                return Err(Error::Timeout {
                    timeout: self.timeout,
                });
            }
        };

        tracing::debug!("Corrector finished in {:?}", started.elapsed());

        if !status.success() {
            return Err(Error::Execution {
                code: status.code(),
                stderr: String::from_utf8_lossy(&errors).trim_end().to_string(),
            });
        }

        match written {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::warn!("Corrector closed its input before reading the whole batch");
            }
            Err(e) => return Err(e.into()),
        }

        let output = decode_output(output)?;
        let predictions =
            PredictionResult::from_output(misspellings, &output, count, self.duplicates())?;

        tracing::info!(
            "Corrector answered {} of {} terms",
            predictions.answered(),
            misspellings.len()
        );
        Ok(predictions)
    }
}

/// @ai:intent Serialize terms as newline-terminated lines in request order
/// @ai:effects pure
fn batch_payload(misspellings: &[String]) -> String {
    let mut payload = String::with_capacity(misspellings.iter().map(|m| m.len() + 1).sum());

    for term in misspellings {
        payload.push_str(term);
        payload.push('\n');
    }
    payload
}

/// @ai:intent Write the batch then close stdin to signal end of input
/// @ai:effects io
async fn write_batch(mut stdin: ChildStdin, payload: String) -> io::Result<()> {
    stdin.write_all(payload.as_bytes()).await?;
    stdin.shutdown().await?;
    drop(stdin);
    Ok(())
}

/// @ai:intent Read a pipe until the process closes it
/// @ai:effects io
async fn drain<R>(mut pipe: R) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let mut buffer = Vec::new();
    pipe.read_to_end(&mut buffer).await?;
    Ok(buffer)
}

fn missing_pipe(name: &str) -> Error {
    Error::Io(io::Error::other(format!("corrector {} was not captured", name)))
}
