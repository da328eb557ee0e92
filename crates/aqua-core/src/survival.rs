use aqua_model::RecordSet;

/// Decides which cleaned rows are kept.
///
/// A row survives when at least one of the `any_of` columns present in the
/// record set has a value; when none of them are present, only rows with no
/// value in any uploaded column are dropped. Columns added during cleaning do
/// not keep a row alive. Every present `required` column must also have a
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurvivalRule {
    pub any_of: Vec<String>,
    pub required: Vec<String>,
}

impl SurvivalRule {
    pub fn any_of(fields: Vec<String>) -> Self {
        Self {
            any_of: fields,
            required: Vec::new(),
        }
    }

    pub fn requiring<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Drops failing rows; returns how many were removed.
    ///
    /// `uploaded` lists the columns the record set had before cleaning.
    pub fn apply(&self, records: &mut RecordSet, uploaded: &[String]) -> usize {
        let present = |fields: &[String]| -> Vec<String> {
            fields
                .iter()
                .filter(|field| records.has_column(field))
                .cloned()
                .collect()
        };
        let any_of = present(&self.any_of);
        let required = present(&self.required);
        let uploaded = present(uploaded);
        records.retain(|record| {
            let has_required = required.iter().all(|field| !record.is_missing(field));
            let has_any = if any_of.is_empty() {
                uploaded.iter().any(|field| !record.is_missing(field))
            } else {
                any_of.iter().any(|field| !record.is_missing(field))
            };
            has_required && has_any
        })
    }
}
