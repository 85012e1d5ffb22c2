//! Add/edit bed form.
//!
//! Values travel as raw strings so a rejected submission can be shown back
//! exactly as typed. The form never refetches anything; the screen that
//! opened it does that after a successful submission.

use serde::Deserialize;

use bedmgmt_domain::bed::{Bed, BedPayload, KNOWN_STATUSES};
use bedmgmt_domain::bed_type::BedType;
use bedmgmt_domain::error::{BedMgmtError, ValidationError};
use bedmgmt_domain::id::LocationId;
use bedmgmt_domain::location::Location;

use crate::ports::BedBackend;
use crate::services::bed_service::{BedService, FormMode};

/// Raw form fields, named like the JSON payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BedFormValues {
    pub bed_number: String,
    pub bed_type: String,
    pub row: String,
    pub column: String,
    pub status: String,
    pub location_uuid: String,
}

impl BedFormValues {
    /// Values describing an existing payload.
    #[must_use]
    pub fn from_payload(payload: &BedPayload) -> Self {
        Self {
            bed_number: payload.bed_number.clone(),
            bed_type: payload.bed_type.clone(),
            row: payload.row.to_string(),
            column: payload.column.to_string(),
            status: payload.status.clone(),
            location_uuid: payload.location_uuid.to_string(),
        }
    }

    /// Values describing an existing bed; the location stays blank when the
    /// bed carries none.
    #[must_use]
    pub fn from_bed(bed: &Bed) -> Self {
        BedPayload::from_bed(bed).map_or_else(
            || Self {
                bed_number: bed.bed_number.clone(),
                bed_type: bed
                    .bed_type
                    .as_ref()
                    .map(|t| t.name.clone())
                    .unwrap_or_default(),
                row: bed.row.to_string(),
                column: bed.column.to_string(),
                status: bed.status.clone(),
                location_uuid: String::new(),
            },
            |payload| Self::from_payload(&payload),
        )
    }

    /// Convert into a payload. Only the numeric fields and the location id
    /// are checked, since they cannot be represented otherwise; everything
    /// else is passed through for the backend to judge.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for non-numeric `row`/`column` or a
    /// malformed location id.
    pub fn to_payload(&self) -> Result<BedPayload, ValidationError> {
        Ok(BedPayload {
            bed_number: self.bed_number.trim().to_string(),
            bed_type: self.bed_type.clone(),
            row: parse_number("row", &self.row)?,
            column: parse_number("column", &self.column)?,
            status: self.status.clone(),
            location_uuid: LocationId::parse(&self.location_uuid)?,
        })
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<u32, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// One `<option>` of a select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>, current: &str) -> Self {
        let value = value.into();
        let selected = value == current;
        Self {
            value,
            label: label.into(),
            selected,
        }
    }
}

/// Everything needed to render the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedForm {
    pub mode: FormMode,
    pub values: BedFormValues,
    pub bed_type_options: Vec<SelectOption>,
    pub location_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
    pub error: Option<String>,
}

impl BedForm {
    /// Build the form; `bed_types` are expected de-duplicated already.
    #[must_use]
    pub fn new(
        mode: FormMode,
        values: BedFormValues,
        bed_types: &[BedType],
        locations: &[Location],
    ) -> Self {
        let bed_type_options = bed_types
            .iter()
            .map(|t| SelectOption::new(t.name.clone(), t.label(), &values.bed_type))
            .collect();
        let location_options = locations
            .iter()
            .map(|l| SelectOption::new(l.uuid.to_string(), l.display.clone(), &values.location_uuid))
            .collect();

        let mut statuses: Vec<&str> = KNOWN_STATUSES.to_vec();
        if !values.status.is_empty() && !statuses.contains(&values.status.as_str()) {
            statuses.push(&values.status);
        }
        let status_options = statuses
            .into_iter()
            .map(|s| SelectOption::new(s, s, &values.status))
            .collect();

        Self {
            mode,
            values,
            bed_type_options,
            location_options,
            status_options,
            error: None,
        }
    }

    /// Attach a message explaining why the last submission failed.
    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add bed",
            FormMode::Edit(_) => "Edit bed",
        }
    }
}

/// Validate the submitted values and dispatch them to the bed service.
///
/// # Errors
///
/// Returns [`BedMgmtError::Validation`] without contacting the backend when
/// the values cannot form a payload, otherwise the backend error.
pub async fn submit<B: BedBackend>(
    service: &BedService<B>,
    mode: FormMode,
    values: &BedFormValues,
) -> Result<Bed, BedMgmtError> {
    let payload = values.to_payload()?;
    service.submit(mode, payload).await
}
