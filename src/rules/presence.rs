//! Presence rules: nullable, required, true, false, requiredIf

use serde_json::Value;

use crate::registry::Registry;
use crate::rule::Rule;
use crate::text::uc_first;
use crate::value;

pub(crate) fn install(registry: &mut Registry) {
    // nullable never fails on its own; its real effect is the
    // short-circuit applied by the field validator when the value is
    // empty.
    registry.register("nullable", Rule::passthrough());

    registry.register(
        "required",
        Rule::value(value::is_present, |_| uc_first("this field is required")),
    );

    registry.register(
        "true",
        Rule::value(
            |v| v == &Value::Bool(true),
            |_| uc_first("this field has to be true"),
        ),
    );

    registry.register(
        "false",
        Rule::value(
            |v| v == &Value::Bool(false),
            |_| uc_first("this field has to be false"),
        ),
    );

    // Registered but never implemented upstream; fails every invocation.
    registry.register(
        "requiredIf",
        Rule::stub(|_| uc_first("this field is required")),
    );
}
