use acl_core::{classify, AclLine, ActionPolicy};
use serde::Serialize;

/// Classification of one ACL statement, or the reason it cannot be converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectRow {
    pub line: usize,
    pub kind: String,
    pub action: Option<String>,
    pub network: Option<String>,
    pub error: Option<String>,
    pub text: String,
}

impl InspectRow {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Classify every statement without stopping at the first bad line.
pub fn inspect_statements(lines: &[AclLine], policy: ActionPolicy) -> Vec<InspectRow> {
    lines
        .iter()
        .map(|line| match classify(&line.text, policy) {
            Ok(stmt) => InspectRow {
                line: line.number,
                kind: stmt.kind().to_string(),
                action: stmt.action().map(ToString::to_string),
                network: stmt.prefix().map(|p| p.to_string()),
                error: None,
                text: line.text.clone(),
            },
            Err(err) => InspectRow {
                line: line.number,
                kind: "invalid".to_string(),
                action: None,
                network: None,
                error: Some(err.to_string()),
                text: line.text.clone(),
            },
        })
        .collect()
}
