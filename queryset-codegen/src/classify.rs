//! Field capability classification
//!
//! Decides, per field, which predicate methods, ordering methods, setters and
//! preload methods the generators emit.

use crate::schema::{Field, TypeCategory};
use queryset::Operator;

/// Generated surface of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    /// Predicate operators, in [`Operator::ALL`] order
    pub operators: Vec<Operator>,
    pub orderable: bool,
    pub settable: bool,
    /// Association loaded through a `preload_<field>` method
    pub preload: bool,
}

/// Legal operators for a type category, in emission order
pub fn operators(category: &TypeCategory) -> Vec<Operator> {
    use queryset::Operator::*;
    match category {
        TypeCategory::Boolean => vec![Eq, Ne],
        TypeCategory::OrderedScalar => vec![Eq, Ne, Gt, Gte, Lt, Lte, In, NotIn],
        TypeCategory::String => vec![Eq, Ne, Like, In, NotIn],
        TypeCategory::Nullable(inner) => {
            let mut ops = operators(inner);
            ops.extend([IsNull, IsNotNull]);
            ops.sort();
            ops
        }
        TypeCategory::Association => Vec::new(),
    }
}

fn orderable(category: &TypeCategory) -> bool {
    match category {
        TypeCategory::OrderedScalar | TypeCategory::String => true,
        TypeCategory::Nullable(inner) => orderable(inner),
        TypeCategory::Boolean | TypeCategory::Association => false,
    }
}

pub fn classify(field: &Field) -> Capabilities {
    let category = field.category();
    if field.is_association() {
        return Capabilities {
            operators: Vec::new(),
            orderable: false,
            settable: false,
            preload: true,
        };
    }
    // soft-delete scoping is implicit only
    if field.soft_delete {
        return Capabilities {
            operators: Vec::new(),
            orderable: false,
            settable: false,
            preload: false,
        };
    }
    Capabilities {
        operators: operators(&category),
        orderable: orderable(&category),
        settable: !field.primary_key,
        preload: false,
    }
}
