use std::io::{self, Write};

use serde_json::{json, Value};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// `error` event carrying the full error chain
pub fn error_event(command: &str, err: &anyhow::Error) -> Value {
    let chain: Vec<String> = err.chain().map(|c| c.to_string()).collect();
    json!({
        "event": "error",
        "command": command,
        "message": err.to_string(),
        "chain": chain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn write_event_is_one_line() {
        let mut buf = Vec::new();
        write_event(&mut buf, &json!({"event": "stage", "stage": "code"})).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "{\"event\":\"stage\",\"stage\":\"code\"}\n");
    }

    #[test]
    fn error_event_lists_causes() {
        let err = Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, "no such file"))
            .context("reading example card")
            .unwrap_err();

        let event = error_event("generate", &err);

        assert_eq!(event["event"], "error");
        assert_eq!(event["message"], "reading example card");
        assert_eq!(event["chain"][1], "no such file");
    }
}
