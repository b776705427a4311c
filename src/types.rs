use serde::{Deserialize, Serialize};

use crate::HeatmapError;

/// One record of a dataset response: the source image filename plus its
/// embedding vector. Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingRow {
    pub filename: String,
    pub embedding: Vec<f64>,
}

/// Grid dimensions derived from a validated row set: one grid row per
/// record, one column per embedding dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub rows: usize,
    pub columns: usize,
}

/// Checks the invariant the data endpoint is supposed to uphold: at
/// least one non-empty row, and every embedding the same length.
pub fn validate_rows(rows: &[EmbeddingRow]) -> Result<GridDims, HeatmapError> {
    let first = rows.first().ok_or(HeatmapError::EmptyDataset)?;
    let columns = first.embedding.len();
    if columns == 0 {
        return Err(HeatmapError::EmptyDataset);
    }
    for (idx, row) in rows.iter().enumerate().skip(1) {
        if row.embedding.len() != columns {
            return Err(HeatmapError::RaggedRow {
                row: idx,
                expected: columns,
                actual: row.embedding.len(),
            });
        }
    }
    Ok(GridDims {
        rows: rows.len(),
        columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(filename: &str, embedding: Vec<f64>) -> EmbeddingRow {
        EmbeddingRow {
            filename: filename.into(),
            embedding,
        }
    }

    #[test]
    fn deserializes_endpoint_shape() {
        let json = r#"[{"filename":"a.jpg","embedding":[0.0,1.0]},{"filename":"b.jpg","embedding":[0.5,0.25]}]"#;
        let rows: Vec<EmbeddingRow> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].filename, "a.jpg");
        assert_eq!(rows[1].embedding, vec![0.5, 0.25]);
    }

    #[test]
    fn validate_derives_dims() {
        let rows = vec![row("a.jpg", vec![0.0, 1.0]), row("b.jpg", vec![0.3, 0.7])];
        let dims = validate_rows(&rows).unwrap();
        assert_eq!(
            dims,
            GridDims {
                rows: 2,
                columns: 2
            }
        );
    }

    #[test]
    fn validate_rejects_empty_set() {
        assert!(matches!(
            validate_rows(&[]),
            Err(HeatmapError::EmptyDataset)
        ));
    }

    #[test]
    fn validate_rejects_zero_width_rows() {
        let rows = vec![row("a.jpg", vec![])];
        assert!(matches!(
            validate_rows(&rows),
            Err(HeatmapError::EmptyDataset)
        ));
    }

    #[test]
    fn validate_rejects_ragged_rows() {
        let rows = vec![
            row("a.jpg", vec![0.0, 1.0, 0.5]),
            row("b.jpg", vec![0.1, 0.2]),
        ];
        match validate_rows(&rows) {
            Err(HeatmapError::RaggedRow {
                row,
                expected,
                actual,
            }) => {
                assert_eq!(row, 1);
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected RaggedRow, got {other:?}"),
        }
    }
}
