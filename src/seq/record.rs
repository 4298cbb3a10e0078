// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// A FastA record: the header line (without the leading '>') and the raw sequence. The identifier
// and description are derived from the header on demand, so that transformations which do not
// touch the header (e.g. subsequence extraction) write it back unchanged.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        SeqRecord {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// The identifier, i.e. the header up to the first whitespace.
    pub fn id(&self) -> &str {
        match self.header.find(char::is_whitespace) {
            Some(idx) => &self.header[..idx],
            None => &self.header,
        }
    }

    /// Free text following the identifier, if any.
    pub fn description(&self) -> Option<&str> {
        let idx = self.header.find(char::is_whitespace)?;
        let desc = self.header[idx..].trim();
        if desc.is_empty() {
            None
        } else {
            Some(desc)
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
