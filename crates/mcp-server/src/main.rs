use anyhow::{Context, Result};
use serde_json::{json, Value as JsonValue};
use shijian::{AdvancedQuery, ChronologyConfig, ChronologyRepository, Column, HistoryEntry};
use std::io::{self, BufRead, BufReader, Write};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const MAX_MESSAGE_BYTES: usize = 1_048_576; // 1 MiB
const MAX_KEYWORD_BYTES: usize = 8 * 1024; // 8 KiB

struct AppState {
    repo: ChronologyRepository,
}

impl AppState {
    fn open() -> Result<Self> {
        let config = ChronologyConfig::from_env().context("invalid SHIJIAN_* configuration")?;
        let repo = ChronologyRepository::open(config)?;
        Ok(Self { repo })
    }
}

fn main() -> Result<()> {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let state = AppState::open().context("failed to open chronology database")?;
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    loop {
        let maybe = match read_message(&mut reader) {
            Ok(m) => m,
            Err(e) => {
                // Bad framing answers -32700 and the server keeps reading.
                warn!(error = %e, "rejected malformed frame");
                let err_resp = json!({
                    "jsonrpc": "2.0",
                    "id": null,
                    "error": { "code": -32700, "message": format!("Parse error: {e}") }
                });
                write_message(&mut writer, &err_resp)?;
                continue;
            }
        };
        let Some(request) = maybe else {
            break;
        };
        if let Some(response) = handle_request(&state, &request) {
            write_message(&mut writer, &response)?;
        }
    }

    state.repo.close().context("failed to close chronology database")?;
    info!("stdin closed, shutting down");
    Ok(())
}

/// Read one `Content-Length` framed message. `Ok(None)` means stdin closed.
fn read_message<R: BufRead>(reader: &mut R) -> Result<Option<JsonValue>> {
    let Some(len) = read_frame_length(reader)? else {
        return Ok(None);
    };
    if len > MAX_MESSAGE_BYTES {
        anyhow::bail!("frame of {len} bytes exceeds max allowed {MAX_MESSAGE_BYTES} bytes");
    }
    let mut body = vec![0_u8; len];
    reader.read_exact(&mut body).context("truncated frame body")?;
    serde_json::from_slice(&body)
        .map(Some)
        .context("invalid JSON payload")
}

/// Consume header lines up to the blank separator and return the body length.
fn read_frame_length<R: BufRead>(reader: &mut R) -> Result<Option<usize>> {
    let mut length = None;
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let header = line.trim_end_matches(['\r', '\n']);
        if header.is_empty() {
            break;
        }
        let Some((name, value)) = header.split_once(':') else {
            continue;
        };
        if name.trim().eq_ignore_ascii_case("content-length") {
            let parsed = value
                .trim()
                .parse::<usize>()
                .with_context(|| format!("invalid Content-Length {value:?}"))?;
            length = Some(parsed);
        }
    }
    length.map(Some).context("missing Content-Length header")
}

fn write_message<W: Write>(writer: &mut W, message: &JsonValue) -> Result<()> {
    let body = serde_json::to_vec(message)?;
    let header = format!("Content-Length: {}\r\n\r\n", body.len());
    writer.write_all(header.as_bytes())?;
    writer.write_all(&body)?;
    writer.flush().context("failed to flush response")
}

fn handle_request(state: &AppState, req: &JsonValue) -> Option<JsonValue> {
    let id = req.get("id").cloned();
    let method = req.get("method").and_then(JsonValue::as_str)?;
    debug!(method, "request");

    match method {
        "initialize" => id.map(|id_val| {
            json!({
                "jsonrpc": "2.0",
                "id": id_val,
                "result": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": { "tools": {} },
                    "serverInfo": { "name": "shijian-mcp", "version": env!("CARGO_PKG_VERSION") }
                }
            })
        }),
        "notifications/initialized" => None,
        "tools/list" => id.map(|id_val| {
            json!({
                "jsonrpc": "2.0",
                "id": id_val,
                "result": {
                    "tools": tools_schema()
                }
            })
        }),
        "tools/call" => id.map(|id_val| {
            let result = call_tool(state, req.get("params"));
            match result {
                Ok(tool_result) => json!({
                    "jsonrpc": "2.0",
                    "id": id_val,
                    "result": tool_result
                }),
                Err(err) => json!({
                    "jsonrpc": "2.0",
                    "id": id_val,
                    "result": {
                        "content": [{ "type": "text", "text": format!("tool error: {err:#}") }],
                        "isError": true
                    }
                }),
            }
        }),
        "ping" => id.map(|id_val| json!({ "jsonrpc": "2.0", "id": id_val, "result": {} })),
        _ => id.map(|id_val| {
            json!({
                "jsonrpc": "2.0",
                "id": id_val,
                "error": {
                    "code": -32601,
                    "message": format!("method not found: {method}")
                }
            })
        }),
    }
}

fn tools_schema() -> Vec<JsonValue> {
    let text_field = json!({"type": "string", "maxLength": MAX_KEYWORD_BYTES});
    vec![
        json!({
            "name": "lookup_year",
            "description": "List every reign counting the given AD year (negative for BC).",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "year": {"type": ["integer", "string"]}
                },
                "required": ["year"]
            }
        }),
        json!({
            "name": "search",
            "description": "Find entries whose ganzhi, ruler, era, dynasty or regime contains the keyword, in Simplified or Traditional script.",
            "inputSchema": {
                "type": "object",
                "properties": { "keyword": text_field },
                "required": ["keyword"]
            }
        }),
        json!({
            "name": "advanced_query",
            "description": "Filter entries by an inclusive year range and per-field keywords; all supplied filters must match.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "year_from": {"type": "integer"},
                    "year_to": {"type": "integer"},
                    "ganzhi": text_field,
                    "period": text_field,
                    "regime": text_field,
                    "emperor_title": text_field,
                    "emperor_name": text_field,
                    "reign_title": text_field
                }
            }
        }),
        json!({
            "name": "columns",
            "description": "Describe the chronology columns.",
            "inputSchema": { "type": "object", "properties": {} }
        }),
    ]
}

fn call_tool(state: &AppState, params: Option<&JsonValue>) -> Result<JsonValue> {
    let name = params
        .and_then(|v| v.get("name"))
        .and_then(JsonValue::as_str)
        .context("missing tool name")?;
    let args = params
        .and_then(|v| v.get("arguments"))
        .cloned()
        .unwrap_or_else(|| json!({}));

    match name {
        "lookup_year" => {
            let year = match args.get("year") {
                Some(JsonValue::Number(n)) => n.as_i64().context("year must be an integer")?,
                Some(JsonValue::String(s)) => state.repo.config().parse_year(s)?,
                _ => anyhow::bail!("year is required"),
            };
            let entries = state.repo.lookup_by_year(year)?;
            Ok(entries_result(
                format!("{} entr(ies) for year {year}", entries.len()),
                &entries,
            ))
        }
        "search" => {
            let keyword = args
                .get("keyword")
                .and_then(JsonValue::as_str)
                .context("keyword is required")?;
            check_text_size("keyword", keyword)?;
            let entries = state.repo.search_free_text(keyword)?;
            Ok(entries_result(
                format!("{} entr(ies) matching {keyword}", entries.len()),
                &entries,
            ))
        }
        "advanced_query" => {
            let query: AdvancedQuery =
                serde_json::from_value(args).context("invalid advanced_query arguments")?;
            for (column, value) in query.text_filters() {
                check_text_size(column.sql_name(), value)?;
            }
            let entries = state.repo.advanced_query(&query)?;
            Ok(entries_result(
                format!("{} entr(ies) matching all filters", entries.len()),
                &entries,
            ))
        }
        "columns" => {
            let columns: Vec<JsonValue> = Column::ALL
                .into_iter()
                .map(|c| {
                    json!({
                        "name": c,
                        "label": c.label(),
                        "description": c.description()
                    })
                })
                .collect();
            let text = Column::ALL
                .into_iter()
                .map(Column::description)
                .collect::<Vec<_>>()
                .join("\n");
            Ok(json!({
                "content": [{ "type": "text", "text": text }],
                "structuredContent": { "columns": columns }
            }))
        }
        _ => anyhow::bail!("unknown tool: {name}"),
    }
}

fn check_text_size(field: &str, text: &str) -> Result<()> {
    if text.len() > MAX_KEYWORD_BYTES {
        anyhow::bail!(
            "{field} exceeds max allowed size ({} bytes)",
            MAX_KEYWORD_BYTES
        );
    }
    Ok(())
}

/// Summary line, then a tab-separated table under the column labels.
fn entries_result(summary: String, entries: &[HistoryEntry]) -> JsonValue {
    let mut text = summary;
    if !entries.is_empty() {
        let header: Vec<&str> = Column::ALL.into_iter().map(Column::label).collect();
        text.push('\n');
        text.push_str(&header.join("\t"));
        for entry in entries {
            text.push('\n');
            text.push_str(&entry.to_string());
        }
    }
    json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": { "entries": entries }
    })
}
