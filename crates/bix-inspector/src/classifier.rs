//! Ordered classification rules. The first matching rule wins.

use bix_core::enums::Category;

use crate::provider::ReflectionProvider;

/// Names classified as constants before any other rule runs.
pub const CONSTANT_NAMES: [&str; 6] = [
    "True",
    "False",
    "None",
    "Ellipsis",
    "NotImplemented",
    "__debug__",
];

/// Assign a resolved symbol to exactly one category.
pub fn classify<P: ReflectionProvider>(provider: &P, name: &str, handle: &P::Handle) -> Category {
    if CONSTANT_NAMES.contains(&name) {
        return Category::Constant;
    }
    if provider.is_type(handle) {
        return if provider.is_subtype_of_error(handle) {
            Category::ExceptionType
        } else {
            Category::Type
        };
    }
    if provider.is_callable(handle) {
        return Category::Function;
    }
    Category::Other
}
