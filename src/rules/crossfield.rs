//! Cross-field and element rules: same, file, size

use crate::registry::Registry;
use crate::rule::Rule;
use crate::text::{from_slug, uc_first};

pub(crate) fn install(registry: &mut Registry) {
    registry.register(
        "same",
        Rule::form_wide(
            // Both fields missing compare equal, matching the source's
            // optional-chained lookups.
            |name, other, form| form.value(name) == form.value(other),
            |name, other| {
                format!("the {} field should be the same as the {} field", name, other)
            },
        ),
    );

    registry.register(
        "file",
        Rule::element(
            |element| element.map_or(false, |e| e.file_count() > 0),
            |_| uc_first("a file has to be chosen for this field"),
        ),
    );

    // Placeholder for a file-size check that was never completed.
    registry.register(
        "size",
        Rule::stub(|name| uc_first(&format!("the file {}", from_slug(name)))),
    );
}
