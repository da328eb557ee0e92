//! Greedy one-to-one column mapper.

use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;

use aqua_model::StandardField;

use crate::error::MappingError;
use crate::normalize::{keys_match, normalize_label};
use crate::types::{ColumnMapping, ColumnOverride, MappedColumn, MatchOrigin};

/// Maps uploaded column labels onto a fixed, ordered list of standard fields.
///
/// Fields are processed in their declared order and each claims the first
/// unclaimed label whose normalized key contains, or is contained in, the
/// field's name key. Aliases are tried only when no unclaimed label matches
/// the name. The first candidate wins; there is no best-score search. Every label and every field is used at
/// most once.
///
/// # Example
///
/// ```ignore
/// use aqua_map::ColumnMapper;
///
/// let mapper = ColumnMapper::new(&schema.fields);
/// let mapping = mapper.map(&["Temp_C".to_string(), "Lat".to_string()])?;
/// ```
pub struct ColumnMapper<'a> {
    fields: &'a [StandardField],
    field_keys: Vec<Vec<(String, MatchOrigin)>>,
    overrides: Vec<ColumnOverride>,
}

struct ClaimState {
    labels: Vec<bool>,
    fields: Vec<bool>,
    found: Vec<(usize, MappedColumn)>,
}

impl ClaimState {
    fn new(label_count: usize, field_count: usize) -> Self {
        Self {
            labels: vec![false; label_count],
            fields: vec![false; field_count],
            found: Vec::new(),
        }
    }

    fn claim(&mut self, field_index: usize, label_index: usize, mapped: MappedColumn) {
        self.labels[label_index] = true;
        self.fields[field_index] = true;
        self.found.push((field_index, mapped));
    }
}

impl<'a> ColumnMapper<'a> {
    pub fn new(fields: &'a [StandardField]) -> Self {
        let field_keys = fields.iter().map(field_keys).collect();
        Self {
            fields,
            field_keys,
            overrides: Vec::new(),
        }
    }

    /// Adds explicit assignments that are claimed before greedy matching.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Vec<ColumnOverride>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Builds the mapping for an uploaded header.
    ///
    /// Fails only when an override names an unknown column or field, or
    /// reuses a column or field.
    pub fn map(&self, labels: &[String]) -> Result<ColumnMapping, MappingError> {
        let label_keys: Vec<String> = labels.iter().map(|label| normalize_label(label)).collect();
        let mut state = ClaimState::new(labels.len(), self.fields.len());
        self.claim_overrides(labels, &mut state)?;
        self.claim_greedy(labels, &label_keys, &mut state);
        Ok(finish(labels, state))
    }

    fn claim_overrides(
        &self,
        labels: &[String],
        state: &mut ClaimState,
    ) -> Result<(), MappingError> {
        for assignment in &self.overrides {
            let label_index = labels
                .iter()
                .position(|label| label.trim() == assignment.source_column)
                .ok_or_else(|| MappingError::ColumnNotFound(assignment.source_column.clone()))?;
            let field_index = self
                .fields
                .iter()
                .position(|field| field.name.eq_ignore_ascii_case(&assignment.target_field))
                .ok_or_else(|| MappingError::FieldNotFound(assignment.target_field.clone()))?;
            let field_name = &self.fields[field_index].name;
            if state.labels[label_index] {
                let previous = state
                    .found
                    .iter()
                    .find(|(_, m)| m.source_index == label_index)
                    .map(|(_, m)| m.target_field.clone())
                    .unwrap_or_default();
                return Err(MappingError::ColumnAlreadyUsed {
                    column: labels[label_index].clone(),
                    field: previous,
                });
            }
            if state.fields[field_index] {
                let previous = state
                    .found
                    .iter()
                    .find(|(idx, _)| *idx == field_index)
                    .map(|(_, m)| m.source_column.clone())
                    .unwrap_or_default();
                return Err(MappingError::FieldAlreadyMapped {
                    field: field_name.clone(),
                    column: previous,
                });
            }
            state.claim(
                field_index,
                label_index,
                MappedColumn {
                    source_column: labels[label_index].clone(),
                    source_index: label_index,
                    target_field: field_name.clone(),
                    confidence: 1.0,
                    origin: MatchOrigin::Override,
                },
            );
        }
        Ok(())
    }

    fn claim_greedy(&self, labels: &[String], label_keys: &[String], state: &mut ClaimState) {
        for (field_index, field) in self.fields.iter().enumerate() {
            if state.fields[field_index] {
                continue;
            }
            let candidate = self.field_keys[field_index].iter().find_map(|(field_key, origin)| {
                label_keys
                    .iter()
                    .enumerate()
                    .find(|(label_index, label_key)| {
                        !state.labels[*label_index] && keys_match(label_key, field_key)
                    })
                    .map(|(label_index, _)| (label_index, field_key, *origin))
            });
            let Some((label_index, field_key, origin)) = candidate else {
                continue;
            };
            let confidence = jaro_similarity(label_keys[label_index].chars(), field_key.chars());
            state.claim(
                field_index,
                label_index,
                MappedColumn {
                    source_column: labels[label_index].clone(),
                    source_index: label_index,
                    target_field: field.name.clone(),
                    confidence: confidence as f32,
                    origin,
                },
            );
        }
    }
}

/// Maps labels onto fields with no overrides.
pub fn map_columns(labels: &[String], fields: &[StandardField]) -> ColumnMapping {
    // Without overrides `map` has nothing to reject.
    ColumnMapper::new(fields).map(labels).unwrap_or_default()
}

fn field_keys(field: &StandardField) -> Vec<(String, MatchOrigin)> {
    let mut keys = vec![(normalize_label(&field.name), MatchOrigin::Name)];
    for alias in &field.aliases {
        let key = normalize_label(alias);
        if !key.is_empty() && !keys.iter().any(|(existing, _)| *existing == key) {
            keys.push((key, MatchOrigin::Alias));
        }
    }
    keys
}

fn finish(labels: &[String], state: ClaimState) -> ColumnMapping {
    let ClaimState {
        labels: claimed,
        mut found,
        ..
    } = state;
    found.sort_by_key(|(field_index, _)| *field_index);
    let unmapped_columns = labels
        .iter()
        .zip(claimed)
        .filter(|(_, used)| !used)
        .map(|(label, _)| label.clone())
        .collect();
    ColumnMapping {
        mappings: found.into_iter().map(|(_, mapped)| mapped).collect(),
        unmapped_columns,
    }
}
