//! Per-file change records built from a libgit2 diff.
//!
//! The JSON shape mirrors what commit-message prompts expect: one object per
//! file with its hunks, and one tagged record per changed line.

use crate::error::Result;
use git2::{Delta, DiffDelta, DiffFile, DiffHunk, DiffLine, Patch};
use serde::Serialize;

const DEV_NULL: &str = "/dev/null";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    pub chunks: Vec<Chunk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    pub content: String,
    pub changes: Vec<Change>,
    pub old_start: u32,
    pub old_lines: u32,
    pub new_start: u32,
    pub new_lines: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Change {
    Add { add: bool, ln: u32, content: String },
    Del { del: bool, ln: u32, content: String },
    Normal { normal: bool, ln1: u32, ln2: u32, content: String },
}

impl FileDiff {
    /// Build the record for one file patch.
    pub fn from_patch(patch: &Patch<'_>) -> Result<Self> {
        let delta = patch.delta();
        let mut file = file_header(&delta);

        for hunk_idx in 0..patch.num_hunks() {
            let (hunk, line_count) = patch.hunk(hunk_idx)?;
            let mut chunk = chunk_header(&hunk);
            for line_idx in 0..line_count {
                let line = patch.line_in_hunk(hunk_idx, line_idx)?;
                chunk.changes.extend(change(&line));
            }
            file.chunks.push(chunk);
        }

        Ok(file)
    }
}

fn file_header(delta: &DiffDelta<'_>) -> FileDiff {
    let old = delta.old_file();
    let new = delta.new_file();
    let added = delta.status() == Delta::Added;
    let deleted = delta.status() == Delta::Deleted;

    let from = if added { Some(DEV_NULL.to_string()) } else { file_path(&old) };
    let to = if deleted { Some(DEV_NULL.to_string()) } else { file_path(&new) };

    // `index <old>..<new> [mode]`; the mode is only shown when both sides share it.
    let mut index = vec![format!("{}..{}", short_id(&old), short_id(&new))];
    if !added && !deleted && old.mode() == new.mode() {
        index.push(format!("{:o}", u32::from(new.mode())));
    }

    FileDiff {
        chunks: Vec::new(),
        from,
        to,
        index: Some(index),
        new: added.then_some(true),
        deleted: deleted.then_some(true),
    }
}

fn file_path(file: &DiffFile<'_>) -> Option<String> {
    file.path().map(|p| p.to_string_lossy().into_owned())
}

fn short_id(file: &DiffFile<'_>) -> String {
    let mut id = file.id().to_string();
    id.truncate(7);
    id
}

fn chunk_header(hunk: &DiffHunk<'_>) -> Chunk {
    Chunk {
        content: line_text(hunk.header()),
        changes: Vec::new(),
        old_start: hunk.old_start(),
        old_lines: hunk.old_lines(),
        new_start: hunk.new_start(),
        new_lines: hunk.new_lines(),
    }
}

/// One record per `+`, `-` or context line; end-of-file newline markers are skipped.
fn change(line: &DiffLine<'_>) -> Option<Change> {
    let origin = line.origin();
    let content = format!("{origin}{}", line_text(line.content()));
    let old_ln = line.old_lineno().unwrap_or_default();
    let new_ln = line.new_lineno().unwrap_or_default();

    match origin {
        '+' => Some(Change::Add { add: true, ln: new_ln, content }),
        '-' => Some(Change::Del { del: true, ln: old_ln, content }),
        ' ' => Some(Change::Normal { normal: true, ln1: old_ln, ln2: new_ln, content }),
        _ => None,
    }
}

/// Line bytes without the trailing `\n`. A carriage return before it is content.
fn line_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
