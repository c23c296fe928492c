use super::{Formatter, ToFormula};
use crate::Result;

use gridkit_core::Error;

/// A field reference, rendered as `{fieldId}`.
pub(super) struct FieldRef<'a>(pub(super) &'a str);

impl ToFormula for FieldRef<'_> {
    fn to_formula(self, f: &mut Formatter<'_>) -> Result<()> {
        let fields = &f.compiler.fields;
        let field = fields
            .get(self.0)
            .ok_or_else(|| Error::unresolved_field_ref(self.0, fields.fields()))?;

        fmt!(f, "{", field.id.as_str(), "}");
        Ok(())
    }
}
