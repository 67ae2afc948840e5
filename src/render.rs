//! Pure view models for both screens.
//!
//! The browser screens map these rows to table markup and the CLI prints
//! them with [`text_table`]; neither re-derives labels or styling.

use crate::model::{ClaimRecord, Tone};
use crate::upload::UploadState;

pub const DASHBOARD_TITLE: &str = "Invoice Fraud Detection Dashboard";
pub const RESULTS_TITLE: &str = "Classification Results";
pub const CLAIMS_PAGE_TITLE: &str = "Medical Claims Dashboard";
pub const CLAIMS_TITLE: &str = "Processed Claims";

pub const CLASSIFICATION_HEADERS: [&str; 2] = ["Invoice #", "Classification"];
pub const CLAIM_HEADERS: [&str; 4] = ["Claim ID", "Patient Name", "Amount", "Status"];

/// Label of the upload trigger.
pub fn upload_button_label(loading: bool) -> &'static str {
    if loading { "Uploading..." } else { "Upload Invoice CSV" }
}

/// One line of the classification table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRow {
    /// 1-based position of the invoice in the uploaded file.
    pub invoice_number: usize,
    pub label: String,
    pub tone: Tone,
}

impl ClassificationRow {
    pub fn cells(&self) -> Vec<String> {
        vec![self.invoice_number.to_string(), self.label.clone()]
    }
}

/// Rows of the classification table, one per label, in response order.
pub fn classification_rows(state: &UploadState) -> Vec<ClassificationRow> {
    state
        .classifications()
        .iter()
        .enumerate()
        .map(|(idx, c)| ClassificationRow {
            invoice_number: idx + 1,
            label: c.label().to_string(),
            tone: c.tone(),
        })
        .collect()
}

/// The results table is only drawn once there is something in it.
pub fn shows_results(state: &UploadState) -> bool {
    !state.classifications().is_empty()
}

/// The status line, if there is one to show.
pub fn status_line(state: &UploadState) -> Option<&str> {
    Some(state.status_message()).filter(|m| !m.is_empty())
}

/// One line of the claims table, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRow {
    /// Row key.
    pub id: String,
    pub patient_name: String,
    pub amount: String,
    pub status: String,
}

impl ClaimRow {
    pub fn cells(&self) -> [&str; 4] {
        [&self.id, &self.patient_name, &self.amount, &self.status]
    }
}

pub fn claim_rows(claims: &[ClaimRecord]) -> Vec<ClaimRow> {
    claims
        .iter()
        .map(|claim| ClaimRow {
            id: claim.id.to_string(),
            patient_name: claim.patient_name.clone().unwrap_or_default(),
            amount: claim.amount.as_ref().map(ToString::to_string).unwrap_or_default(),
            status: claim.status.clone().unwrap_or_default(),
        })
        .collect()
}

/// Lay out a table as aligned plain-text lines: header, rule, then one
/// line per row. Trailing padding is trimmed.
pub fn text_table<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            let len = cell.as_ref().chars().count();
            match widths.get_mut(idx) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }

    let format_line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(headers.to_vec()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(format_line(row.iter().map(|c| c.as_ref()).collect()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClaimAmount, ClaimId, Classification, UploadResponse};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn classified(labels: &[&str], message: &str) -> UploadState {
        let mut state = UploadState::new();
        state.begin();
        state.settle(Ok(UploadResponse {
            classification: labels.iter().map(|l| Classification::new(*l)).collect(),
            message: message.to_string(),
            filename: None,
        }));
        state
    }

    #[test]
    fn test_button_label_follows_loading() {
        assert_eq!(upload_button_label(false), "Upload Invoice CSV");
        assert_eq!(upload_button_label(true), "Uploading...");
    }

    #[test]
    fn test_row_count_matches_classifications() {
        let state = classified(&["Valid", "Fraudulent", "Valid"], "Invoice received successfully");
        let rows = classification_rows(&state);
        assert_eq!(rows.len(), state.classifications().len());
        assert_eq!(rows[1].invoice_number, 2);
        assert_eq!(rows[1].tone, Tone::Alert);
        assert_eq!(rows[2].cells(), vec!["3".to_string(), "Valid".to_string()]);
    }

    #[test]
    fn test_empty_state_hides_table_and_message() {
        let state = UploadState::new();
        assert!(!shows_results(&state));
        assert_eq!(status_line(&state), None);
    }

    #[test]
    fn test_message_without_rows() {
        let state = classified(&[], "No invoices in file");
        assert!(!shows_results(&state));
        assert_eq!(status_line(&state), Some("No invoices in file"));
    }

    #[test]
    fn test_claim_amount_drops_trailing_zeros() {
        let claims = vec![ClaimRecord {
            id: ClaimId::Text("C-9".to_string()),
            patient_name: Some("Jane Doe".to_string()),
            amount: Some(Decimal::from_str("1250.50").unwrap().into()),
            status: Some("approved".to_string()),
        }];
        let rows = claim_rows(&claims);
        assert_eq!(rows[0].cells(), ["C-9", "Jane Doe", "1250.5", "approved"]);
    }

    #[test]
    fn test_missing_claim_fields_render_blank() {
        let claims = vec![ClaimRecord {
            id: ClaimId::Number(4),
            patient_name: None,
            amount: Some(ClaimAmount::Text("$1,200".to_string())),
            status: None,
        }];
        let rows = claim_rows(&claims);
        assert_eq!(rows[0].cells(), ["4", "", "$1,200", ""]);
    }

    #[test]
    fn test_text_table_aligns_columns() {
        let rows = vec![
            vec!["1".to_string(), "Fraudulent".to_string()],
            vec!["2".to_string(), "Valid".to_string()],
        ];
        let lines = text_table(&CLASSIFICATION_HEADERS, &rows);
        assert_eq!(
            lines,
            vec![
                "Invoice #  Classification",
                "---------  --------------",
                "1          Fraudulent",
                "2          Valid",
            ]
        );
    }

    #[test]
    fn test_text_table_without_rows_has_header_only() {
        let rows: Vec<Vec<String>> = Vec::new();
        let lines = text_table(&CLAIM_HEADERS, &rows);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Claim ID"));
    }
}
