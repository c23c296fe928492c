use super::{Formatter, ToFormula};
use crate::Result;

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

impl<L> ToFormula for Comma<L>
where
    L: IntoIterator,
    L::Item: ToFormula,
{
    fn to_formula(self, f: &mut Formatter<'_>) -> Result<()> {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s, i);
            s = ", ";
        }
        Ok(())
    }
}
