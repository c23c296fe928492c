use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The closed set of field kinds defined by the remote schema model.
///
/// Kinds this crate does not know about deserialize to [`FieldKind::Unknown`]
/// instead of failing, so a schema fetched after the remote system grows a
/// new kind still loads. Unknown fields can be neither read nor written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    SingleLineText,
    Email,
    Url,
    MultilineText,
    PhoneNumber,
    RichText,
    AiText,
    Number,
    Percent,
    Currency,
    Duration,
    Rating,
    Checkbox,
    SingleSelect,
    MultipleSelects,
    SingleCollaborator,
    MultipleCollaborators,
    MultipleRecordLinks,
    MultipleAttachments,
    Date,
    DateTime,
    Barcode,
    Button,
    Formula,
    Rollup,
    Lookup,
    MultipleLookupValues,
    Count,
    AutoNumber,
    CreatedTime,
    LastModifiedTime,
    CreatedBy,
    LastModifiedBy,
    ExternalSyncSource,
    Unknown,
}

impl FieldKind {
    /// Every known kind, `Unknown` excluded.
    pub const ALL: [FieldKind; 34] = [
        FieldKind::SingleLineText,
        FieldKind::Email,
        FieldKind::Url,
        FieldKind::MultilineText,
        FieldKind::PhoneNumber,
        FieldKind::RichText,
        FieldKind::AiText,
        FieldKind::Number,
        FieldKind::Percent,
        FieldKind::Currency,
        FieldKind::Duration,
        FieldKind::Rating,
        FieldKind::Checkbox,
        FieldKind::SingleSelect,
        FieldKind::MultipleSelects,
        FieldKind::SingleCollaborator,
        FieldKind::MultipleCollaborators,
        FieldKind::MultipleRecordLinks,
        FieldKind::MultipleAttachments,
        FieldKind::Date,
        FieldKind::DateTime,
        FieldKind::Barcode,
        FieldKind::Button,
        FieldKind::Formula,
        FieldKind::Rollup,
        FieldKind::Lookup,
        FieldKind::MultipleLookupValues,
        FieldKind::Count,
        FieldKind::AutoNumber,
        FieldKind::CreatedTime,
        FieldKind::LastModifiedTime,
        FieldKind::CreatedBy,
        FieldKind::LastModifiedBy,
        FieldKind::ExternalSyncSource,
    ];

    /// The wire name of the kind, as used by the metadata API.
    pub fn as_str(self) -> &'static str {
        use FieldKind::*;

        match self {
            SingleLineText => "singleLineText",
            Email => "email",
            Url => "url",
            MultilineText => "multilineText",
            PhoneNumber => "phoneNumber",
            RichText => "richText",
            AiText => "aiText",
            Number => "number",
            Percent => "percent",
            Currency => "currency",
            Duration => "duration",
            Rating => "rating",
            Checkbox => "checkbox",
            SingleSelect => "singleSelect",
            MultipleSelects => "multipleSelects",
            SingleCollaborator => "singleCollaborator",
            MultipleCollaborators => "multipleCollaborators",
            MultipleRecordLinks => "multipleRecordLinks",
            MultipleAttachments => "multipleAttachments",
            Date => "date",
            DateTime => "dateTime",
            Barcode => "barcode",
            Button => "button",
            Formula => "formula",
            Rollup => "rollup",
            Lookup => "lookup",
            MultipleLookupValues => "multipleLookupValues",
            Count => "count",
            AutoNumber => "autoNumber",
            CreatedTime => "createdTime",
            LastModifiedTime => "lastModifiedTime",
            CreatedBy => "createdBy",
            LastModifiedBy => "lastModifiedBy",
            ExternalSyncSource => "externalSyncSource",
            Unknown => "unknown",
        }
    }

    /// Parses a wire name. Unrecognized names map to `Unknown`.
    pub fn from_wire_name(name: &str) -> FieldKind {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .unwrap_or(FieldKind::Unknown)
    }
}

impl core::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(FieldKind::from_wire_name(&name))
    }
}
