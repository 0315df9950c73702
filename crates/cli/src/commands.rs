//! `encode` / `decode` subcommands.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Subcommand;
use codec::Cryptor;
use tracing::debug;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encrypt text into a hex blob
    Encode {
        /// Text to encrypt (read from stdin when omitted)
        text: Option<String>,
    },
    /// Decrypt a hex blob back into text
    Decode {
        /// Hex blob to decrypt (read from stdin when omitted)
        blob: Option<String>,
    },
}

/// Run `command` with `codec`, reading the value from `stdin` when it was not
/// given on the command line. Returns the line to print.
pub fn run(command: Command, codec: &impl Cryptor, stdin: impl Read) -> Result<String> {
    match command {
        Command::Encode { text } => {
            let text = value_or_stdin(text, stdin)?;
            debug!(len = text.len(), "encoding");
            codec.encrypt_text(&text).context("encode failed")
        }
        Command::Decode { blob } => {
            let blob = value_or_stdin(blob, stdin)?;
            debug!(len = blob.len(), "decoding");
            codec.decrypt_text(blob.trim()).context("decode failed")
        }
    }
}

fn value_or_stdin(value: Option<String>, mut stdin: impl Read) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    let trimmed = buf.trim_end_matches(['\r', '\n']).len();
    buf.truncate(trimmed);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::{AeadFramedCodec, CodecError};

    const KEY: &str = "1ab3adcf15eeb01bc812aae31b24efb5";
    const KNOWN_BLOB: &str = "0cfaeaa3999edf03f2458fdd1b66469c939cda0ed1435d4e5cb359604f8010d6a9";

    fn codec() -> AeadFramedCodec {
        AeadFramedCodec::new(KEY).unwrap()
    }

    #[test]
    fn decode_argument() {
        let cmd = Command::Decode {
            blob: Some(KNOWN_BLOB.into()),
        };
        assert_eq!(run(cmd, &codec(), std::io::empty()).unwrap(), "test");
    }

    #[test]
    fn decode_from_stdin_ignores_newline() {
        let stdin = format!("{KNOWN_BLOB}\n");
        let cmd = Command::Decode { blob: None };
        assert_eq!(run(cmd, &codec(), stdin.as_bytes()).unwrap(), "test");
    }

    #[test]
    fn encode_from_stdin_round_trips() {
        let cmd = Command::Encode { text: None };
        let blob = run(cmd, &codec(), &b"line one\nline two\r\n"[..]).unwrap();
        assert_eq!(codec().decrypt_text(&blob).unwrap(), "line one\nline two");
    }

    #[test]
    fn decode_error_keeps_codec_error() {
        let cmd = Command::Decode {
            blob: Some("123456".into()),
        };
        let err = run(cmd, &codec(), std::io::empty()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CodecError>(),
            Some(CodecError::UnsupportedNonceLength(0x12))
        ));
    }
}
