//! Named validation rules: a test predicate paired with a message
//! generator, each tagged with the argument shape it consumes

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::form::Form;

/// Handle to a host-supplied file input. The engine never looks up
/// elements itself; the host resolves the handle for `file` rules and
/// passes it in.
pub trait FileInput {
    /// Number of files currently selected.
    fn file_count(&self) -> usize;
}

type ValueTest = Arc<dyn Fn(&Value) -> bool + Send + Sync>;
type ValueParamTest = Arc<dyn Fn(&Value, &str) -> bool + Send + Sync>;
type ValueParamsTest = Arc<dyn Fn(&Value, &[String]) -> bool + Send + Sync>;
type ElementTest = Arc<dyn Fn(Option<&dyn FileInput>) -> bool + Send + Sync>;
type FormTest = Arc<dyn Fn(&str, &str, &Form) -> bool + Send + Sync>;

/// What a rule's test consumes. The variant fixes the argument shape,
/// replacing name-based dispatch over a loose argument list.
#[derive(Clone)]
pub enum RuleTest {
    /// The field's value alone.
    Value(ValueTest),
    /// The value plus the first spec parameter.
    ValueParam(ValueParamTest),
    /// The value plus the whole parameter list.
    ValueParams(ValueParamsTest),
    /// A host-supplied file-input handle.
    Element(ElementTest),
    /// Two field names plus the whole form, for cross-field rules.
    FormWide(FormTest),
    /// Structurally registered but not implemented; always fails.
    Unimplemented,
}

type FieldMessage = Arc<dyn Fn(&str) -> String + Send + Sync>;
type FieldParamMessage = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;
type FieldParamValueMessage = Arc<dyn Fn(&str, &str, &Value) -> String + Send + Sync>;
type FieldParamsMessage = Arc<dyn Fn(&str, &[String]) -> String + Send + Sync>;

/// What a rule's message generator consumes.
#[derive(Clone)]
pub enum RuleMessage {
    /// The rule never produces a message (`nullable`).
    None,
    /// The field name.
    Field(FieldMessage),
    /// The field name and the first parameter.
    FieldParam(FieldParamMessage),
    /// The field name, the first parameter, and the raw value; `min`
    /// and `max` pick their wording by the value's numeric-ness.
    FieldParamValue(FieldParamValueMessage),
    /// The field name and the whole parameter list.
    FieldParams(FieldParamsMessage),
}

/// Arguments assembled for one rule invocation.
pub(crate) struct RuleArgs<'a> {
    pub field: &'a str,
    pub value: &'a Value,
    pub params: &'a [String],
    pub form: &'a Form,
    pub element: Option<&'a dyn FileInput>,
}

impl<'a> RuleArgs<'a> {
    fn first_param(&self) -> &str {
        self.params.first().map(String::as_str).unwrap_or("")
    }
}

/// A named validator: a test predicate and a message generator. A rule
/// is immutable once registered; its identity is its name within a
/// registry. Custom rules use the exact same shape as built-ins.
#[derive(Clone)]
pub struct Rule {
    test: RuleTest,
    message: RuleMessage,
}

impl Rule {
    pub fn new(test: RuleTest, message: RuleMessage) -> Self {
        Self { test, message }
    }

    /// Rule over the value alone.
    pub fn value<T, M>(test: T, message: M) -> Self
    where
        T: Fn(&Value) -> bool + Send + Sync + 'static,
        M: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            test: RuleTest::Value(Arc::new(test)),
            message: RuleMessage::Field(Arc::new(message)),
        }
    }

    /// Rule over the value and a single parameter.
    pub fn with_param<T, M>(test: T, message: M) -> Self
    where
        T: Fn(&Value, &str) -> bool + Send + Sync + 'static,
        M: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        Self {
            test: RuleTest::ValueParam(Arc::new(test)),
            message: RuleMessage::FieldParam(Arc::new(message)),
        }
    }

    /// Rule over the value and a single parameter whose message also
    /// inspects the raw value.
    pub fn with_param_echo<T, M>(test: T, message: M) -> Self
    where
        T: Fn(&Value, &str) -> bool + Send + Sync + 'static,
        M: Fn(&str, &str, &Value) -> String + Send + Sync + 'static,
    {
        Self {
            test: RuleTest::ValueParam(Arc::new(test)),
            message: RuleMessage::FieldParamValue(Arc::new(message)),
        }
    }

    /// Rule over the value and the whole parameter list.
    pub fn with_params<T, M>(test: T, message: M) -> Self
    where
        T: Fn(&Value, &[String]) -> bool + Send + Sync + 'static,
        M: Fn(&str, &[String]) -> String + Send + Sync + 'static,
    {
        Self {
            test: RuleTest::ValueParams(Arc::new(test)),
            message: RuleMessage::FieldParams(Arc::new(message)),
        }
    }

    /// Rule over a host-supplied file-input handle.
    pub fn element<T, M>(test: T, message: M) -> Self
    where
        T: Fn(Option<&dyn FileInput>) -> bool + Send + Sync + 'static,
        M: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            test: RuleTest::Element(Arc::new(test)),
            message: RuleMessage::Field(Arc::new(message)),
        }
    }

    /// Cross-field rule receiving the validated field's name, the first
    /// parameter as a second field name, and the whole form.
    pub fn form_wide<T, M>(test: T, message: M) -> Self
    where
        T: Fn(&str, &str, &Form) -> bool + Send + Sync + 'static,
        M: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        Self {
            test: RuleTest::FormWide(Arc::new(test)),
            message: RuleMessage::FieldParam(Arc::new(message)),
        }
    }

    /// Rule that always passes and never emits a message (`nullable`).
    pub fn passthrough() -> Self {
        Self {
            test: RuleTest::Value(Arc::new(|_| true)),
            message: RuleMessage::None,
        }
    }

    /// Placeholder rule that is structurally recognized but not
    /// implemented; it fails every invocation with the given message.
    pub fn stub<M>(message: M) -> Self
    where
        M: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            test: RuleTest::Unimplemented,
            message: RuleMessage::Field(Arc::new(message)),
        }
    }

    /// Run the test with arguments shaped by the test's variant.
    pub(crate) fn passes(&self, args: &RuleArgs<'_>) -> bool {
        match &self.test {
            RuleTest::Value(test) => test(args.value),
            RuleTest::ValueParam(test) => test(args.value, args.first_param()),
            RuleTest::ValueParams(test) => test(args.value, args.params),
            RuleTest::Element(test) => test(args.element),
            RuleTest::FormWide(test) => test(args.field, args.first_param(), args.form),
            RuleTest::Unimplemented => false,
        }
    }

    /// Format the failure message with arguments shaped by the message's
    /// variant. `None` for rules that never produce a message.
    pub(crate) fn render(&self, args: &RuleArgs<'_>) -> Option<String> {
        match &self.message {
            RuleMessage::None => None,
            RuleMessage::Field(message) => Some(message(args.field)),
            RuleMessage::FieldParam(message) => Some(message(args.field, args.first_param())),
            RuleMessage::FieldParamValue(message) => {
                Some(message(args.field, args.first_param(), args.value))
            }
            RuleMessage::FieldParams(message) => Some(message(args.field, args.params)),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self.test {
            RuleTest::Value(_) => "Value",
            RuleTest::ValueParam(_) => "ValueParam",
            RuleTest::ValueParams(_) => "ValueParams",
            RuleTest::Element(_) => "Element",
            RuleTest::FormWide(_) => "FormWide",
            RuleTest::Unimplemented => "Unimplemented",
        };
        f.debug_struct("Rule").field("test", &shape).finish()
    }
}
