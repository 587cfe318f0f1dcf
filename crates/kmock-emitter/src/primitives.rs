//! Stub primitive templates and the session registry that deduplicates them.
//!
//! Every `(arity, has-return)` shape becomes one generic Kotlin class,
//! `Mock<arity><0|1>`, in the runtime package. For two parameters and a
//! result the class reads:
//!
//! ```kotlin
//! class Mock21<P0, P1, R> {
//!     fun call(p0: P0, p1: P1): R
//!     infix fun producesValue(value: R)
//!     fun callCount(predicateP0: Predicate<P0>, predicateP1: Predicate<P1>): Int
//!     // ...
//! }
//! ```

use std::collections::BTreeSet;

use crate::member_plan::StubKind;
use crate::source_writer::SourceWriter;
use crate::support::{NOT_CONFIGURED_EXCEPTION, SEQUENCE_EXHAUSTED_EXCEPTION};

/// Stub shapes already emitted in this processing session.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveRegistry {
    emitted: BTreeSet<StubKind>,
}

impl PrimitiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, kind: StubKind) -> bool {
        self.emitted.contains(&kind)
    }

    /// Record `kind`; false if it was already there.
    pub fn insert(&mut self, kind: StubKind) -> bool {
        self.emitted.insert(kind)
    }

    /// Shapes from `kinds` that are not emitted yet, deduplicated and sorted.
    pub fn missing(&self, kinds: impl IntoIterator<Item = StubKind>) -> Vec<StubKind> {
        let wanted: BTreeSet<StubKind> = kinds.into_iter().collect();
        wanted
            .into_iter()
            .filter(|kind| !self.emitted.contains(kind))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }
}

/// Names used throughout one template.
struct Shape {
    kind: StubKind,
    /// `P0`, `P1`, ...
    type_params: Vec<String>,
    /// `p0`, `p1`, ...
    args: Vec<String>,
}

impl Shape {
    fn new(kind: StubKind) -> Self {
        Shape {
            kind,
            type_params: (0..kind.arity).map(|i| format!("P{i}")).collect(),
            args: (0..kind.arity).map(|i| format!("p{i}")).collect(),
        }
    }

    fn result(&self) -> &'static str {
        if self.kind.returns_value { "R" } else { "Unit" }
    }

    /// `<P0, P1, R>`, `<R>`, or empty for `Mock00`.
    fn class_type_params(&self) -> String {
        let mut all = self.type_params.clone();
        if self.kind.returns_value {
            all.push("R".to_string());
        }
        if all.is_empty() {
            String::new()
        } else {
            format!("<{}>", all.join(", "))
        }
    }

    /// `(P0, P1) -> R`
    fn function_type(&self) -> String {
        format!("({}) -> {}", self.type_params.join(", "), self.result())
    }

    /// `{ _, _ -> body }`, or `{ body }` with no parameters.
    fn ignoring_lambda(&self, body: &str) -> String {
        match (self.kind.arity, body.is_empty()) {
            (0, true) => "{}".to_string(),
            (0, false) => format!("{{ {body} }}"),
            (arity, true) => format!("{{ {} -> }}", vec!["_"; arity].join(", ")),
            (arity, false) => format!("{{ {} -> {body} }}", vec!["_"; arity].join(", ")),
        }
    }

    fn typed_args(&self) -> String {
        self.args
            .iter()
            .zip(&self.type_params)
            .map(|(arg, ty)| format!("{arg}: {ty}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn arg_list(&self) -> String {
        self.args.join(", ")
    }
}

/// Full Kotlin source of the primitive for `kind`.
pub fn render_primitive(kind: StubKind, runtime_package: &str, indent_width: usize) -> String {
    let shape = Shape::new(kind);
    let not_configured = format!("throw {NOT_CONFIGURED_EXCEPTION}()");
    let mut w = SourceWriter::new(indent_width);

    if !runtime_package.is_empty() {
        w.line(&format!("package {runtime_package}"));
        w.blank_line();
    }
    w.line("@Suppress(\"MemberVisibilityCanBePrivate\", \"unused\")");
    let header = format!("class {}{}", kind.class_name(), shape.class_type_params());
    w.block(&header, |w| {
        w.line(&format!(
            "private var answer: {} = {}",
            shape.function_type(),
            shape.ignoring_lambda(&not_configured)
        ));
        if kind.arity == 0 {
            w.line("private var calls: Int = 0");
        } else {
            w.line(&format!(
                "private val history = mutableListOf<CallHolder<{}>>()",
                shape.type_params.join(", ")
            ));
        }

        w.blank_line();
        w.block("fun reset()", |w| {
            if kind.arity == 0 {
                w.line("calls = 0");
            } else {
                w.line("history.clear()");
            }
            w.line(&format!("answer = {}", shape.ignoring_lambda(&not_configured)));
        });

        w.blank_line();
        let call_header = if kind.returns_value {
            format!("fun call({}): R", shape.typed_args())
        } else {
            format!("fun call({})", shape.typed_args())
        };
        w.block(&call_header, |w| {
            if kind.arity == 0 {
                w.line("calls++");
            } else {
                w.line(&format!("history.add(CallHolder({}))", shape.arg_list()));
            }
            let invoke = format!("answer({})", shape.arg_list());
            if kind.returns_value {
                w.line(&format!("return {invoke}"));
            } else {
                w.line(&invoke);
            }
        });

        w.blank_line();
        w.block("infix fun throwsOnCall(error: Throwable)", |w| {
            w.line(&format!("answer = {}", shape.ignoring_lambda("throw error")));
        });

        w.blank_line();
        w.block(&format!("infix fun delegatesTo(function: {})", shape.function_type()), |w| {
            w.line("answer = function");
        });

        if kind.returns_value {
            write_value_configuration(w, &shape);
        } else {
            w.blank_line();
            w.block("fun doesNothing()", |w| {
                w.line(&format!("answer = {}", shape.ignoring_lambda("")));
            });
        }

        write_history_queries(w, &shape);
    });
    w.finish()
}

/// `producesValue`, the sequence variants and `delegatesToSequence`.
fn write_value_configuration(w: &mut SourceWriter, shape: &Shape) {
    let exhausted = format!("throw {SEQUENCE_EXHAUSTED_EXCEPTION}(answered)");

    w.blank_line();
    w.block("infix fun producesValue(value: R)", |w| {
        w.line(&format!("answer = {}", shape.ignoring_lambda("value")));
    });

    w.blank_line();
    w.block("infix fun producesFromSequence(values: Iterable<R>)", |w| {
        w.line("val iterator = values.iterator()");
        w.line("var answered = 0");
        let head = if shape.kind.arity == 0 {
            "answer = {".to_string()
        } else {
            format!("answer = {{ {} ->", vec!["_"; shape.kind.arity].join(", "))
        };
        w.line(&head);
        w.indented(|w| {
            w.line(&format!("if (!iterator.hasNext()) {exhausted}"));
            w.line("answered++");
            w.line("iterator.next()");
        });
        w.line("}");
    });

    w.blank_line();
    w.block("fun producesFromSequence(vararg values: R)", |w| {
        w.line("producesFromSequence(values.asIterable())");
    });

    w.blank_line();
    let sequence_header = format!(
        "infix fun delegatesToSequence(functions: Iterable<{}>)",
        shape.function_type()
    );
    w.block(&sequence_header, |w| {
        w.line("val iterator = functions.iterator()");
        w.line("var answered = 0");
        let head = if shape.kind.arity == 0 {
            "answer = {".to_string()
        } else {
            format!("answer = {{ {} ->", shape.arg_list())
        };
        w.line(&head);
        w.indented(|w| {
            w.line(&format!("if (!iterator.hasNext()) {exhausted}"));
            w.line("answered++");
            w.line(&format!("iterator.next()({})", shape.arg_list()));
        });
        w.line("}");
    });

    w.blank_line();
    w.block(
        &format!(
            "fun delegatesToSequence(vararg functions: {})",
            shape.function_type()
        ),
        |w| w.line("delegatesToSequence(functions.asIterable())"),
    );
}

/// `callCount` overloads and the private call record.
fn write_history_queries(w: &mut SourceWriter, shape: &Shape) {
    w.blank_line();
    if shape.kind.arity == 0 {
        w.line("fun callCount(): Int = calls");
        return;
    }
    w.line("fun callCount(): Int = history.size");

    let from_holder: Vec<String> = shape.args.iter().map(|a| format!("it.{a}")).collect();
    w.blank_line();
    w.line(&format!(
        "fun callCount(predicate: ({}) -> Boolean): Int = history.count {{ predicate({}) }}",
        shape.type_params.join(", "),
        from_holder.join(", ")
    ));

    if shape.kind.arity > 1 {
        let predicates: Vec<String> = shape
            .type_params
            .iter()
            .map(|ty| format!("predicate{ty}: Predicate<{ty}>"))
            .collect();
        let conjunction: Vec<String> = shape
            .type_params
            .iter()
            .zip(&from_holder)
            .map(|(ty, field)| format!("predicate{ty}({field})"))
            .collect();
        w.blank_line();
        w.line(&format!("fun callCount({}): Int =", predicates.join(", ")));
        w.indented(|w| {
            w.line(&format!("history.count {{ {} }}", conjunction.join(" && ")));
        });
    }

    let fields: Vec<String> = shape
        .args
        .iter()
        .zip(&shape.type_params)
        .map(|(arg, ty)| format!("val {arg}: {ty}"))
        .collect();
    w.blank_line();
    w.line(&format!(
        "private data class CallHolder<{}>({})",
        shape.type_params.join(", "),
        fields.join(", ")
    ));
}

#[cfg(test)]
#[path = "../tests/primitives.rs"]
mod tests;
