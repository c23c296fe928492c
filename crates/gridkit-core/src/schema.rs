mod choice;
pub use choice::SelectChoice;

mod field;
pub use field::FieldSchema;

mod kind;
pub use kind::FieldKind;

mod lookup;
pub use lookup::{ChoiceLookup, FieldLookup};

mod options;
pub use options::FieldOptions;
