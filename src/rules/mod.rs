//! Built-in validation rules, grouped by family

mod bounds;
mod crossfield;
mod format;
mod presence;
mod sets;

use crate::registry::Registry;

/// Install every built-in rule into a registry. `denylist` is the list
/// of public email-provider domains consulted by `privateEmail`.
pub(crate) fn install(registry: &mut Registry, denylist: Vec<String>) {
    presence::install(registry);
    format::install(registry, denylist);
    bounds::install(registry);
    sets::install(registry);
    crossfield::install(registry);
}
