//! Binary glTF (`.glb`) container validation.
//!
//! The intro scene shows a glTF model. The core does not render it; it only
//! checks the container is well formed and reads a few counts from the JSON
//! chunk, so a broken download degrades to "no model" instead of handing
//! garbage to the renderer.

use crate::error::GlbError;

const MAGIC: u32 = 0x4654_6C67; // "glTF"
const CHUNK_JSON: u32 = 0x4E4F_534A; // "JSON"
const CHUNK_BIN: u32 = 0x004E_4942; // "BIN\0"
const HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

/// Summary of a validated glTF binary.
#[derive(Debug, Clone, PartialEq)]
pub struct GlbInfo {
    pub version: u32,
    /// Total container length from the header.
    pub length: usize,
    pub json: serde_json::Value,
    /// Length of the BIN chunk, if present.
    pub bin_len: Option<usize>,
}

impl GlbInfo {
    pub fn mesh_count(&self) -> usize {
        self.array_len("meshes")
    }

    pub fn node_count(&self) -> usize {
        self.array_len("nodes")
    }

    fn array_len(&self, key: &str) -> usize {
        self.json
            .get(key)
            .and_then(|v| v.as_array())
            .map_or(0, Vec::len)
    }
}

fn read_u32(bytes: &[u8], at: usize) -> Result<u32, GlbError> {
    let slice = bytes.get(at..at + 4).ok_or(GlbError::Truncated {
        needed: at + 4,
        actual: bytes.len(),
    })?;
    Ok(u32::from_le_bytes([slice[0], slice[1], slice[2], slice[3]]))
}

/// Validate a glTF 2.0 binary and parse its JSON chunk.
pub fn parse(bytes: &[u8]) -> Result<GlbInfo, GlbError> {
    let magic = read_u32(bytes, 0)?;
    if magic != MAGIC {
        return Err(GlbError::BadMagic(magic));
    }
    let version = read_u32(bytes, 4)?;
    if version != 2 {
        return Err(GlbError::UnsupportedVersion(version));
    }
    let length = read_u32(bytes, 8)? as usize;
    if bytes.len() < length {
        return Err(GlbError::Truncated {
            needed: length,
            actual: bytes.len(),
        });
    }
    let bytes = &bytes[..length];

    let json_len = read_u32(bytes, HEADER_LEN)? as usize;
    let json_type = read_u32(bytes, HEADER_LEN + 4)?;
    if json_type != CHUNK_JSON {
        return Err(GlbError::MissingJson(json_type));
    }
    let json_start = HEADER_LEN + CHUNK_HEADER_LEN;
    let json_end = json_start + json_len;
    let json_bytes = bytes.get(json_start..json_end).ok_or(GlbError::Truncated {
        needed: json_end,
        actual: bytes.len(),
    })?;
    let json: serde_json::Value = serde_json::from_slice(json_bytes)?;

    let mut bin_len = None;
    if json_end + CHUNK_HEADER_LEN <= bytes.len() {
        let len = read_u32(bytes, json_end)? as usize;
        let kind = read_u32(bytes, json_end + 4)?;
        let end = json_end + CHUNK_HEADER_LEN + len;
        if end > bytes.len() {
            return Err(GlbError::Truncated {
                needed: end,
                actual: bytes.len(),
            });
        }
        if kind == CHUNK_BIN {
            bin_len = Some(len);
        }
    }

    Ok(GlbInfo {
        version,
        length,
        json,
        bin_len,
    })
}
