use crate::{Expr, Result};

use gridkit_core::{schema::FieldLookup, FieldSchema};
use url::form_urlencoded;

/// Options for listing records.
///
/// Field references (in the filter, sorts and projected fields) may be given
/// by name or id; they are resolved against the table's schema when the
/// query is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    filter: Option<Expr>,
    sort: Vec<Sort>,
    fields: Vec<String>,
    max_records: Option<usize>,
    page_size: Option<usize>,
    view: Option<String>,
    cell_format: Option<CellFormat>,
    time_zone: Option<String>,
    user_locale: Option<String>,
    record_metadata: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// Field name or id
    pub field: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// How the API renders cell values.
///
/// `String` rendering requires a time zone and a user locale, and produces
/// text the field converters do not expect for most kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Json,
    String,
}

impl ListQuery {
    pub fn new() -> ListQuery {
        ListQuery::default()
    }

    /// Only return records for which `expr` is truthy.
    pub fn filter(mut self, expr: impl Into<Expr>) -> ListQuery {
        self.filter = Some(expr.into());
        self
    }

    /// Adds a sort key. Keys apply in the order they are added.
    pub fn sort(mut self, field: impl Into<String>, direction: Direction) -> ListQuery {
        self.sort.push(Sort {
            field: field.into(),
            direction,
        });
        self
    }

    /// Restricts the fields returned for each record.
    pub fn fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> ListQuery {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Caps the total number of records returned across all pages.
    pub fn max_records(mut self, max_records: usize) -> ListQuery {
        self.max_records = Some(max_records);
        self
    }

    /// Records per page. The API enforces its own upper bound.
    pub fn page_size(mut self, page_size: usize) -> ListQuery {
        self.page_size = Some(page_size);
        self
    }

    pub fn view(mut self, view: impl Into<String>) -> ListQuery {
        self.view = Some(view.into());
        self
    }

    pub fn cell_format(mut self, cell_format: CellFormat) -> ListQuery {
        self.cell_format = Some(cell_format);
        self
    }

    pub fn time_zone(mut self, time_zone: impl Into<String>) -> ListQuery {
        self.time_zone = Some(time_zone.into());
        self
    }

    pub fn user_locale(mut self, user_locale: impl Into<String>) -> ListQuery {
        self.user_locale = Some(user_locale.into());
        self
    }

    /// Requests extra per-record metadata, e.g. `commentCount`.
    pub fn record_metadata(mut self, metadata: impl Into<String>) -> ListQuery {
        self.record_metadata.push(metadata.into());
        self
    }

    /// Encodes the query string for the first page.
    pub fn to_query_string(&self, fields: &[FieldSchema]) -> Result<String> {
        Ok(encode(&self.params(fields)?, None))
    }

    /// Resolves and compiles the query into its parameters, in the order
    /// they are sent. Every page of a listing reuses the same parameters.
    pub(crate) fn params(&self, fields: &[FieldSchema]) -> Result<Vec<(String, String)>> {
        let lookup = FieldLookup::new(fields);
        let mut params = vec![param("returnFieldsByFieldId", "true")];

        if let Some(filter) = &self.filter {
            params.push(param("filterByFormula", gridkit_formula::compile(filter, fields)?));
        }

        for (i, sort) in self.sort.iter().enumerate() {
            let field = lookup.resolve(&sort.field)?;
            params.push(param(format!("sort[{i}][field]"), &field.id));
            params.push(param(format!("sort[{i}][direction]"), sort.direction.as_str()));
        }

        for name_or_id in &self.fields {
            params.push(param("fields[]", &lookup.resolve(name_or_id)?.id));
        }

        if let Some(max_records) = self.max_records {
            params.push(param("maxRecords", max_records.to_string()));
        }

        if let Some(page_size) = self.page_size {
            params.push(param("pageSize", page_size.to_string()));
        }

        if let Some(view) = &self.view {
            params.push(param("view", view));
        }

        if let Some(cell_format) = self.cell_format {
            params.push(param("cellFormat", cell_format.as_str()));
        }

        if let Some(time_zone) = &self.time_zone {
            params.push(param("timeZone", time_zone));
        }

        if let Some(user_locale) = &self.user_locale {
            params.push(param("userLocale", user_locale));
        }

        for metadata in &self.record_metadata {
            params.push(param("recordMetadata[]", metadata));
        }

        Ok(params)
    }
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl CellFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            CellFormat::Json => "json",
            CellFormat::String => "string",
        }
    }
}

fn param(key: impl Into<String>, value: impl Into<String>) -> (String, String) {
    (key.into(), value.into())
}

/// Form-encodes `params`, appending the page cursor when there is one.
pub(crate) fn encode(params: &[(String, String)], offset: Option<&str>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.extend_pairs(params);

    if let Some(offset) = offset {
        query.append_pair("offset", offset);
    }

    query.finish()
}
